use serde::Serialize;
use std::fmt;

/// Reference impedance in ohms, shared by all ports or given per port.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Impedance {
    Scalar(f64),
    PerPort(Vec<f64>),
}

impl Impedance {
    pub const DEFAULT_OHMS: f64 = 50.0;

    /// Impedance seen by `port`. `None` past the end of a per-port list.
    pub fn at(&self, port: usize) -> Option<f64> {
        match self {
            Impedance::Scalar(z0) => Some(*z0),
            Impedance::PerPort(z0) => z0.get(port).copied(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Impedance::Scalar(_))
    }

    /// Values as written after `R` on the option line
    pub fn values(&self) -> Vec<f64> {
        match self {
            Impedance::Scalar(z0) => vec![*z0],
            Impedance::PerPort(z0) => z0.clone(),
        }
    }

    /// One token collapses to a scalar
    pub fn from_values(mut values: Vec<f64>) -> Option<Impedance> {
        match values.len() {
            0 => None,
            1 => values.pop().map(Impedance::Scalar),
            _ => Some(Impedance::PerPort(values)),
        }
    }
}

impl Default for Impedance {
    fn default() -> Self {
        Impedance::Scalar(Impedance::DEFAULT_OHMS)
    }
}

impl From<f64> for Impedance {
    fn from(z0: f64) -> Self {
        Impedance::Scalar(z0)
    }
}

impl From<Vec<f64>> for Impedance {
    fn from(z0: Vec<f64>) -> Self {
        Impedance::PerPort(z0)
    }
}

impl fmt::Display for Impedance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vals: Vec<String> = self.values().iter().map(|z| z.to_string()).collect();
        write!(f, "{}", vals.join(" "))
    }
}
