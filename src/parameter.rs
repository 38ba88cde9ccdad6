use crate::error::TouchstoneError;
use core::fmt;
use serde::Serialize;
use std::str::FromStr;

/// Network parameter kind declared on the option line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RFParameter {
    /// Scattering
    #[default]
    S,
    /// Admittance
    Y,
    /// Impedance
    Z,
    /// Inverse hybrid
    G,
    /// Hybrid
    H,
}

impl RFParameter {
    pub const ALL: [RFParameter; 5] = [
        RFParameter::S,
        RFParameter::Y,
        RFParameter::Z,
        RFParameter::G,
        RFParameter::H,
    ];

    pub fn to_str(&self) -> &str {
        match self {
            RFParameter::S => "S",
            RFParameter::Y => "Y",
            RFParameter::Z => "Z",
            RFParameter::G => "G",
            RFParameter::H => "H",
        }
    }

    pub fn to_long_string(&self) -> String {
        match self {
            RFParameter::S => "scattering".to_string(),
            RFParameter::Y => "admittance".to_string(),
            RFParameter::Z => "impedance".to_string(),
            RFParameter::G => "inverse hybrid".to_string(),
            RFParameter::H => "hybrid".to_string(),
        }
    }
}

impl FromStr for RFParameter {
    type Err = TouchstoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s" => Ok(RFParameter::S),
            "y" => Ok(RFParameter::Y),
            "z" => Ok(RFParameter::Z),
            "g" => Ok(RFParameter::G),
            "h" => Ok(RFParameter::H),
            _ => Err(TouchstoneError::UnknownParameter(s.to_string())),
        }
    }
}

impl fmt::Display for RFParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
