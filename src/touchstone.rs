//! Touchstone document model.
//!
//! A document holds the file-level metadata declared by the option line, the
//! frequency axis and the complex parameter matrix. Documents are filled in
//! one of two ways. [`TouchstoneDocument::read`] parses them from text.
//! Programs can also build them with the validating setters or with
//! [`TouchstoneBuilder`]. [`TouchstoneDocument::write`] serializes them back
//! to text.

use crate::error::{Result, TouchstoneError};
use crate::format::NumericFormat;
use crate::frequency::Frequency;
use crate::impedance::Impedance;
use crate::parameter::RFParameter;
use crate::points::ComplexMatrix;
use std::fmt;

pub mod builder;
pub mod option_line;
pub mod reader;
pub mod writer;

pub use self::builder::TouchstoneBuilder;
pub use self::option_line::OptionLine;
pub use self::writer::WriteOptions;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchstoneDocument {
    comments: Vec<String>,
    nports: Option<usize>,
    parameter: Option<RFParameter>,
    format: Option<NumericFormat>,
    impedance: Impedance,
    frequency: Option<Frequency>,
    matrix: Option<ComplexMatrix>,
}

/// Borrowed view of a document that passed validation.
pub(crate) struct Validated<'a> {
    pub nports: usize,
    pub parameter: RFParameter,
    pub format: NumericFormat,
    pub impedance: &'a Impedance,
    pub frequency: &'a Frequency,
    pub matrix: &'a ComplexMatrix,
}

/// Order of (output, input) pairs on a data line. Two-port files list the
/// first column before the second, every other size is row-major.
pub(crate) fn element_order(nports: usize) -> Vec<(usize, usize)> {
    if nports == 2 {
        vec![(0, 0), (1, 0), (0, 1), (1, 1)]
    } else {
        (0..nports)
            .flat_map(|out| (0..nports).map(move |inp| (out, inp)))
            .collect()
    }
}

impl TouchstoneDocument {
    pub fn new() -> Self {
        TouchstoneDocument::default()
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut Vec<String> {
        &mut self.comments
    }

    /// Append a comment line, without the leading `!`
    pub fn push_comment(&mut self, comment: &str) -> &mut Self {
        self.comments.push(comment.to_string());
        self
    }

    pub fn nports(&self) -> Option<usize> {
        self.nports
    }

    pub fn set_nports(&mut self, nports: usize) -> Result<&mut Self> {
        if nports == 0 {
            return Err(TouchstoneError::InvalidPortCount(nports));
        }
        self.nports = Some(nports);
        Ok(self)
    }

    pub fn parameter(&self) -> Option<RFParameter> {
        self.parameter
    }

    /// Set the parameter kind from anything displayable, case-insensitive.
    /// `None` clears the field. An unknown value leaves the field untouched.
    pub fn set_parameter<T: fmt::Display>(&mut self, parameter: Option<T>) -> Result<&mut Self> {
        self.parameter = parameter.map(|p| p.to_string().parse()).transpose()?;
        Ok(self)
    }

    pub fn format(&self) -> Option<NumericFormat> {
        self.format
    }

    /// Set the numeric format from anything displayable, case-insensitive.
    /// `None` clears the field. An unknown value leaves the field untouched.
    pub fn set_format<T: fmt::Display>(&mut self, format: Option<T>) -> Result<&mut Self> {
        self.format = format.map(|f| f.to_string().parse()).transpose()?;
        Ok(self)
    }

    pub fn impedance(&self) -> &Impedance {
        &self.impedance
    }

    pub fn set_impedance<Z: Into<Impedance>>(&mut self, impedance: Z) -> &mut Self {
        self.impedance = impedance.into();
        self
    }

    pub fn frequency(&self) -> Option<&Frequency> {
        self.frequency.as_ref()
    }

    pub fn frequency_mut(&mut self) -> Option<&mut Frequency> {
        self.frequency.as_mut()
    }

    pub fn set_frequency(&mut self, frequency: Frequency) -> &mut Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn matrix(&self) -> Option<&ComplexMatrix> {
        self.matrix.as_ref()
    }

    pub fn set_matrix(&mut self, matrix: ComplexMatrix) -> &mut Self {
        self.matrix = Some(matrix);
        self
    }

    /// Number of frequency points, zero before any frequency is set
    pub fn npts(&self) -> usize {
        self.frequency.as_ref().map_or(0, |f| f.npts())
    }

    /// Check the document can be written. Fails on the first of: parameter
    /// unset, format unset, matrix unset, matrix not square, matrix size not
    /// `nports`, point count not the frequency count, per-port impedance
    /// count not `nports`.
    pub fn validate(&self) -> Result<()> {
        self.validated().map(|_| ())
    }

    pub(crate) fn validated(&self) -> Result<Validated<'_>> {
        let parameter = self
            .parameter
            .ok_or(TouchstoneError::MissingField("parameter"))?;
        let format = self.format.ok_or(TouchstoneError::MissingField("format"))?;
        let matrix = self
            .matrix
            .as_ref()
            .ok_or(TouchstoneError::MissingField("matrix"))?;

        let (rows, cols, npts) = matrix.dim();
        if rows != cols {
            return Err(TouchstoneError::NotSquare { rows, cols });
        }
        let nports = self.nports.ok_or(TouchstoneError::MissingField("nports"))?;
        if rows != nports {
            return Err(TouchstoneError::PortMismatch {
                expected: nports,
                found: rows,
            });
        }

        let frequency = self
            .frequency
            .as_ref()
            .ok_or(TouchstoneError::MissingField("frequency"))?;
        if npts != frequency.npts() {
            return Err(TouchstoneError::PointCountMismatch {
                expected: frequency.npts(),
                found: npts,
            });
        }

        if let Impedance::PerPort(z0) = &self.impedance {
            if z0.len() != nports {
                return Err(TouchstoneError::ImpedanceLength {
                    expected: nports,
                    found: z0.len(),
                });
            }
        }

        Ok(Validated {
            nports,
            parameter,
            format,
            impedance: &self.impedance,
            frequency,
            matrix,
        })
    }
}
