use super::option_line::OptionLine;
use super::{element_order, TouchstoneDocument};
use crate::error::Result;

/// Serializer settings.
///
/// ## Example
/// ```
/// use touchstone::prelude::*;
///
/// let opts = WriteOptions::new().precision(6).pairs_per_line(4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WriteOptions {
    precision: Option<usize>,
    pairs_per_line: Option<usize>,
}

impl WriteOptions {
    pub fn new() -> Self {
        WriteOptions::default()
    }

    /// Fixed number of fractional digits for matrix values. Unset writes the
    /// shortest text that reads back to the same `f64`.
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Start a new line after this many value pairs. Unset writes each
    /// frequency point on a single line.
    pub fn pairs_per_line(mut self, pairs: usize) -> Self {
        self.pairs_per_line = if pairs == 0 { None } else { Some(pairs) };
        self
    }

    fn fmt_value(&self, val: f64) -> String {
        match self.precision {
            Some(digits) => format!("{:.*}", digits, val),
            None => val.to_string(),
        }
    }
}

impl TouchstoneDocument {
    /// Serialize with default [`WriteOptions`].
    pub fn write(&self) -> Result<String> {
        self.write_with(&WriteOptions::default())
    }

    /// Validate, then serialize: comments, the option line, one entry per
    /// frequency point.
    pub fn write_with(&self, opts: &WriteOptions) -> Result<String> {
        let doc = self.validated()?;

        let mut lines: Vec<String> =
            Vec::with_capacity(self.comments.len() + doc.frequency.npts() + 1);
        for comment in self.comments.iter() {
            lines.push(format!("!{}", comment));
        }

        let option_line = OptionLine {
            unit: doc.frequency.unit(),
            parameter: doc.parameter,
            format: doc.format,
            impedance: doc.impedance.clone(),
        };
        lines.push(option_line.to_string());

        let order = element_order(doc.nports);
        let freqs = doc.frequency.scaled();
        for (pt, freq) in freqs.iter().enumerate() {
            let mut line = freq.to_string();
            for (k, &(out, inp)) in order.iter().enumerate() {
                if let Some(per_line) = opts.pairs_per_line {
                    if k > 0 && k % per_line == 0 {
                        lines.push(line);
                        line = String::new();
                    }
                }
                let (x, y) = doc.format.unparse(doc.matrix[[out, inp, pt]]);
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&opts.fmt_value(x));
                line.push(' ');
                line.push_str(&opts.fmt_value(y));
            }
            lines.push(line);
        }

        tracing::debug!(
            nports = doc.nports,
            npts = freqs.len(),
            parameter = %doc.parameter,
            format = %doc.format,
            "wrote touchstone document"
        );

        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text)
    }
}
