use crate::error::TouchstoneError;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Frequency unit of a Touchstone file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    #[default]
    GHz,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 4] = [
        FrequencyUnit::Hz,
        FrequencyUnit::KHz,
        FrequencyUnit::MHz,
        FrequencyUnit::GHz,
    ];

    /// Canonical option line token
    pub fn to_str(&self) -> &str {
        match self {
            FrequencyUnit::Hz => "HZ",
            FrequencyUnit::KHz => "KHZ",
            FrequencyUnit::MHz => "MHZ",
            FrequencyUnit::GHz => "GHZ",
        }
    }

    /// Provides multiplier for unit
    /// FrequencyUnit::MHz = 1e6
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    /// Hz to unit
    pub fn scale(&self, val: f64) -> f64 {
        val / self.multiplier()
    }

    /// Unit to Hz
    pub fn unscale(&self, val: f64) -> f64 {
        val * self.multiplier()
    }
}

impl FromStr for FrequencyUnit {
    type Err = TouchstoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HZ" => Ok(FrequencyUnit::Hz),
            "KHZ" => Ok(FrequencyUnit::KHz),
            "MHZ" => Ok(FrequencyUnit::MHz),
            "GHZ" => Ok(FrequencyUnit::GHz),
            _ => Err(TouchstoneError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
