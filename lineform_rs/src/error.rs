use crate::{bits, scheme};

pub type LineformResult<T> = Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("lineform_rs: bits: {}", _0)]
    Bits(bits::Error),
    #[error("lineform_rs: scheme: {}", _0)]
    Scheme(scheme::Error),
}

impl Error {
    /// Message without the crate and module prefixes, suitable for end users.
    pub fn reason(&self) -> String {
        match self {
            Error::Bits(e) => e.to_string(),
            Error::Scheme(e) => e.to_string(),
        }
    }
}
