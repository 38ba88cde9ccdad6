use crate::error::Result;
use crate::scale::FrequencyUnit;
use ndarray::prelude::*;
use std::fmt;

/// Frequency axis of a network. Values are stored in Hz, `unit` only affects
/// the scaled view used by the file format.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frequency {
    unit: FrequencyUnit,
    value: Array1<f64>,
}

impl Frequency {
    pub fn new() -> Self {
        Frequency::default()
    }

    pub fn from_scaled(pts: &[f64], unit: FrequencyUnit) -> Self {
        Frequency {
            unit,
            value: pts.iter().map(|&x| unit.unscale(x)).collect(),
        }
    }

    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Set the unit from any displayable token, case-insensitive.
    pub fn set_unit<T: fmt::Display>(&mut self, unit: T) -> Result<&mut Self> {
        self.unit = unit.to_string().parse()?;
        Ok(self)
    }

    /// Frequencies in Hz
    pub fn value(&self) -> &Array1<f64> {
        &self.value
    }

    pub fn set_value(&mut self, pts: Array1<f64>) -> &mut Self {
        self.value = pts;
        self
    }

    /// Frequencies in `unit`
    pub fn scaled(&self) -> Array1<f64> {
        self.value.mapv(|x| self.unit.scale(x))
    }

    /// Store frequencies given in `unit`
    pub fn set_scaled(&mut self, pts: &[f64]) -> &mut Self {
        let unit = self.unit;
        self.value = pts.iter().map(|&x| unit.unscale(x)).collect();
        self
    }

    pub fn freq_at(&self, pt: usize) -> Option<f64> {
        self.value.get(pt).copied()
    }

    pub fn scaled_at(&self, pt: usize) -> Option<f64> {
        self.freq_at(pt).map(|x| self.unit.scale(x))
    }

    pub fn npts(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True when the points never decrease. Not enforced anywhere.
    pub fn is_monotonic(&self) -> bool {
        self.value
            .iter()
            .zip(self.value.iter().skip(1))
            .all(|(a, b)| a <= b)
    }
}

#[derive(Clone, Debug)]
enum BuilderPts {
    Hz(Array1<f64>),
    Scaled(Array1<f64>),
    Range { start: f64, stop: f64, step: f64 },
}

/// Builder design pattern for Frequency
///
/// ## Example
/// ```
/// use ndarray::array;
/// use touchstone::prelude::*;
///
/// let freq1 = FrequencyBuilder::new()
///     .unit(FrequencyUnit::GHz)
///     .freqs_scaled(array![1.0, 2.0, 3.0])
///     .build();
///
/// let freq2 = FrequencyBuilder::new()
///     .unit(FrequencyUnit::GHz)
///     .start_stop_step_scaled(1.0, 3.0, 1.0)
///     .build();
///
/// assert_eq!(freq1, freq2);
/// ```
/// Largest number of points a linear sweep builds
pub const MAX_SWEEP_POINTS: usize = 1 << 20;

#[derive(Clone, Debug, Default)]
pub struct FrequencyBuilder {
    unit: FrequencyUnit,
    pts: Option<BuilderPts>,
}

impl FrequencyBuilder {
    pub fn new() -> Self {
        FrequencyBuilder::default()
    }

    pub fn unit(mut self, unit: FrequencyUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit_str(mut self, unit: &str) -> Result<Self> {
        self.unit = unit.parse()?;
        Ok(self)
    }

    /// Frequencies in Hz
    pub fn freqs_hz(mut self, pts: Array1<f64>) -> Self {
        self.pts = Some(BuilderPts::Hz(pts));
        self
    }

    /// Frequencies in the builder's unit
    pub fn freqs_scaled(mut self, pts: Array1<f64>) -> Self {
        self.pts = Some(BuilderPts::Scaled(pts));
        self
    }

    /// Inclusive linear sweep in the builder's unit. A non-positive step, a
    /// reversed range or a non-finite `stop`/`step` gives the single point
    /// `start`, and a non-finite `start` gives an empty axis. Sweeps are capped
    /// at [`MAX_SWEEP_POINTS`].
    pub fn start_stop_step_scaled(mut self, start: f64, stop: f64, step: f64) -> Self {
        self.pts = Some(BuilderPts::Range { start, stop, step });
        self
    }

    pub fn build(self) -> Frequency {
        let unit = self.unit;
        let value = match self.pts {
            None => Array1::zeros(0),
            Some(BuilderPts::Hz(pts)) => pts,
            Some(BuilderPts::Scaled(pts)) => pts.mapv(|x| unit.unscale(x)),
            Some(BuilderPts::Range { start, stop, step }) => {
                if !start.is_finite() {
                    Array1::zeros(0)
                } else if !stop.is_finite() || !step.is_finite() || step <= 0.0 || stop < start {
                    Array1::from_elem(1, unit.unscale(start))
                } else {
                    let span = ((stop - start) / step + 1e-9).floor();
                    let n = if span < (MAX_SWEEP_POINTS - 1) as f64 {
                        span as usize + 1
                    } else {
                        tracing::warn!(
                            "Sweep of {} points truncated to {}",
                            span + 1.0,
                            MAX_SWEEP_POINTS
                        );
                        MAX_SWEEP_POINTS
                    };
                    Array1::from_shape_fn(n, |i| unit.unscale(start + (i as f64) * step))
                }
            }
        };
        Frequency { unit, value }
    }
}
