use super::TouchstoneDocument;
use crate::error::Result;
use crate::format::NumericFormat;
use crate::frequency::Frequency;
use crate::impedance::Impedance;
use crate::parameter::RFParameter;
use crate::points::ComplexMatrix;

/// Builder design pattern for TouchstoneDocument
///
/// Parameter and format start at the option line defaults, `S` and `MA`.
/// The port count is taken from the matrix unless given.
///
/// ## Example
/// ```
/// use ndarray::array;
/// use num::complex::c64;
/// use touchstone::prelude::*;
///
/// let doc = TouchstoneBuilder::new()
///     .comment(" built in code")
///     .format(NumericFormat::RI)
///     .frequency(
///         FrequencyBuilder::new()
///             .unit(FrequencyUnit::MHz)
///             .freqs_scaled(array![100.0, 200.0])
///             .build(),
///     )
///     .matrix(ComplexMatrix::new(array![[[c64(0.5, 0.0), c64(0.25, 0.1)]]]))
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.nports(), Some(1));
/// assert_eq!(
///     doc.write().unwrap(),
///     "! built in code\n# MHZ S RI R 50\n100 0.5 0\n200 0.25 0.1\n"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct TouchstoneBuilder {
    comments: Vec<String>,
    nports: Option<usize>,
    parameter: RFParameter,
    format: NumericFormat,
    impedance: Impedance,
    frequency: Option<Frequency>,
    matrix: Option<ComplexMatrix>,
}

impl Default for TouchstoneBuilder {
    fn default() -> Self {
        TouchstoneBuilder {
            comments: vec![],
            nports: None,
            parameter: RFParameter::default(),
            format: NumericFormat::default(),
            impedance: Impedance::default(),
            frequency: None,
            matrix: None,
        }
    }
}

impl TouchstoneBuilder {
    pub fn new() -> Self {
        TouchstoneBuilder::default()
    }

    /// Add one comment line, without the leading `!`
    pub fn comment(mut self, comment: &str) -> Self {
        self.comments.push(comment.to_string());
        self
    }

    pub fn comments(mut self, comments: Vec<&str>) -> Self {
        self.comments.extend(comments.into_iter().map(String::from));
        self
    }

    pub fn nports(mut self, nports: usize) -> Self {
        self.nports = Some(nports);
        self
    }

    pub fn parameter(mut self, parameter: RFParameter) -> Self {
        self.parameter = parameter;
        self
    }

    pub fn format(mut self, format: NumericFormat) -> Self {
        self.format = format;
        self
    }

    pub fn impedance<Z: Into<Impedance>>(mut self, impedance: Z) -> Self {
        self.impedance = impedance.into();
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn matrix(mut self, matrix: ComplexMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Assemble and validate the document
    pub fn build(self) -> Result<TouchstoneDocument> {
        let mut doc = TouchstoneDocument::new();
        doc.comments = self.comments;
        doc.parameter = Some(self.parameter);
        doc.format = Some(self.format);
        doc.impedance = self.impedance;
        doc.frequency = self.frequency;

        let nports = self.nports.or(self.matrix.as_ref().map(|m| m.nrows()));
        if let Some(nports) = nports {
            doc.set_nports(nports)?;
        }
        doc.matrix = self.matrix;

        doc.validate()?;
        Ok(doc)
    }
}
