use bitvec::{slice::BitSlice, vec::BitVec};
use thiserror::Error;

use crate::error::LineformResult;

/// Bit stream in transmission order: index `i` is time slot `i`.
pub type Bits = BitVec<u32>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("bit stream is empty")]
    EmptyInput,
    #[error("invalid character '{character}' at position {position}, use only 0 or 1")]
    NonBinaryCharacter { character: char, position: usize },
}

impl From<Error> for crate::Error {
    fn from(value: Error) -> Self {
        crate::Error::Bits(value)
    }
}

/// Parses a user-typed bit stream. The first character becomes the first bit
/// on the line. Any character other than `0` or `1` rejects the whole input.
pub fn parse(text: &str) -> LineformResult<Bits> {
    if text.is_empty() {
        return Err(Error::EmptyInput.into());
    }
    let mut bits = Bits::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        match character {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(Error::NonBinaryCharacter { character, position }.into()),
        }
    }
    Ok(bits)
}

pub fn to_string(bits: &BitSlice<u32>) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}
