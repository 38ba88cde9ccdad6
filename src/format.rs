use crate::error::TouchstoneError;
use num::complex::Complex64;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Encoding of a complex matrix element as a pair of numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum NumericFormat {
    /// Real, imaginary
    RI,
    /// Linear magnitude, angle in degrees
    #[default]
    MA,
    /// Magnitude in dB, angle in degrees
    DB,
}

impl NumericFormat {
    pub const ALL: [NumericFormat; 3] = [NumericFormat::RI, NumericFormat::MA, NumericFormat::DB];

    pub fn to_str(&self) -> &str {
        match self {
            NumericFormat::RI => "RI",
            NumericFormat::MA => "MA",
            NumericFormat::DB => "DB",
        }
    }

    /// Pair of file values to a complex number
    pub fn parse(&self, x: f64, y: f64) -> Complex64 {
        match self {
            NumericFormat::RI => Complex64::new(x, y),
            NumericFormat::MA => Complex64::from_polar(x, y.to_radians()),
            NumericFormat::DB => Complex64::from_polar(10_f64.powf(x / 20.0), y.to_radians()),
        }
    }

    /// Complex number to the pair of file values. In dB, magnitudes below
    /// `f64::MIN_POSITIVE` are written as that floor so the value stays finite.
    pub fn unparse(&self, val: Complex64) -> (f64, f64) {
        match self {
            NumericFormat::RI => (val.re, val.im),
            NumericFormat::MA => (val.norm(), val.arg().to_degrees()),
            NumericFormat::DB => (
                20.0 * val.norm().max(f64::MIN_POSITIVE).log10(),
                val.arg().to_degrees(),
            ),
        }
    }
}

impl FromStr for NumericFormat {
    type Err = TouchstoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RI" => Ok(NumericFormat::RI),
            "MA" => Ok(NumericFormat::MA),
            "DB" => Ok(NumericFormat::DB),
            _ => Err(TouchstoneError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for NumericFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
