use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    #[default]
    NrzL,
    NrzI,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
}

/// Shape of the waveform a scheme produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One level per bit, held for the whole bit period.
    Step,
    /// Explicit vertices, with level changes allowed at bit centers.
    Transition,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown scheme '{}', expected one of: {}", _0, Scheme::ids().join(", "))]
    UnknownScheme(String),
}

impl From<Error> for crate::Error {
    fn from(value: Error) -> Self {
        crate::Error::Scheme(value)
    }
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Scheme::NrzL => "Non Return-to-Zero Level",
            Scheme::NrzI => "Non Return-to-Zero Inverted",
            Scheme::BipolarAmi => "Alternate Mark Inversion",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Identifier accepted by [`Scheme::from_str`].
    pub fn id(&self) -> &'static str {
        match self {
            Scheme::NrzL => "nrz-l",
            Scheme::NrzI => "nrz-i",
            Scheme::BipolarAmi => "bipolar-ami",
            Scheme::Pseudoternary => "pseudoternary",
            Scheme::Manchester => "manchester",
            Scheme::DifferentialManchester => "differential-manchester",
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Scheme::Manchester | Scheme::DifferentialManchester => Shape::Transition,
            _ => Shape::Step,
        }
    }

    /// How each bit value is put on the line.
    pub fn rules(&self) -> &'static [&'static str] {
        match self {
            Scheme::NrzL => &["0 → Low level", "1 → High level"],
            Scheme::NrzI => &[
                "0 → No transition at beginning",
                "1 → Transition at beginning",
            ],
            Scheme::BipolarAmi => &[
                "0 → No line signal",
                "1 → Positive or negative level, alternates",
            ],
            Scheme::Pseudoternary => &["0 → Alternates level", "1 → No signal"],
            Scheme::Manchester => &[
                "0 → High to low transition at center",
                "1 → Low to high transition at center",
            ],
            Scheme::DifferentialManchester => &[
                "0 → Transition at start",
                "1 → No transition at start",
                "Always transitions at center",
            ],
        }
    }

    fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(Scheme::id).collect()
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match &id[..] {
            "nrz-l" | "nrzl" => Ok(Scheme::NrzL),
            "nrz-i" | "nrzi" => Ok(Scheme::NrzI),
            "bipolar-ami" | "ami" => Ok(Scheme::BipolarAmi),
            "pseudoternary" => Ok(Scheme::Pseudoternary),
            "manchester" => Ok(Scheme::Manchester),
            "differential-manchester" | "diff-manchester" => Ok(Scheme::DifferentialManchester),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
