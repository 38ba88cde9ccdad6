use super::option_line::OptionLine;
use super::{element_order, TouchstoneDocument};
use crate::error::{Result, TouchstoneError};
use crate::frequency::Frequency;
use crate::points::ComplexMatrix;

/// Cursor over the numeric values of all data lines, in file order.
struct ValueCursor<'a> {
    values: &'a [f64],
    pos: usize,
}

impl<'a> ValueCursor<'a> {
    fn new(values: &'a [f64]) -> Self {
        ValueCursor { values, pos: 0 }
    }

    fn next(&mut self) -> Option<f64> {
        let val = self.values.get(self.pos).copied();
        self.pos += 1;
        val
    }

    fn next_pair(&mut self) -> Option<(f64, f64)> {
        Some((self.next()?, self.next()?))
    }
}

/// Split a line at its first `!`, returning the content and the inline comment.
fn split_inline_comment(line: &str) -> (&str, Option<&str>) {
    match line.split_once('!') {
        Some((content, comment)) => (content.trim_end(), Some(comment)),
        None => (line, None),
    }
}

impl TouchstoneDocument {
    /// Parse Touchstone text describing an `nports`-port network.
    ///
    /// ## Example
    /// ```
    /// use touchstone::prelude::*;
    ///
    /// let doc = TouchstoneDocument::read("# MHz S MA R 50\n100 0.99 -4\n", 1).unwrap();
    /// assert_eq!(doc.parameter(), Some(RFParameter::S));
    /// assert_eq!(doc.frequency().unwrap().unit(), FrequencyUnit::MHz);
    /// assert_eq!(doc.frequency().unwrap().scaled().to_vec(), vec![100.0]);
    /// ```
    pub fn read(text: &str, nports: usize) -> Result<TouchstoneDocument> {
        if nports == 0 {
            return Err(TouchstoneError::InvalidPortCount(nports));
        }

        let mut comments: Vec<String> = vec![];
        let mut options: Option<OptionLine> = None;
        let mut values: Vec<f64> = vec![];

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let trimmed = raw.trim_start();

            if trimmed.trim_end().is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('!') {
                comments.push(comment.to_string());
                continue;
            }

            let (content, inline) = split_inline_comment(trimmed);
            if let Some(comment) = inline {
                tracing::trace!(line, comment, "dropping inline comment");
            }

            if content.starts_with('#') {
                if options.is_some() {
                    return Err(TouchstoneError::DuplicateOptionLine { line });
                }
                options = Some(OptionLine::parse(content, line)?);
                continue;
            }
            if options.is_none() {
                return Err(TouchstoneError::DataBeforeOptionLine { line });
            }

            for token in content.split_whitespace() {
                let val = token
                    .parse::<f64>()
                    .map_err(|_| TouchstoneError::InvalidNumber {
                        line,
                        token: token.to_string(),
                    })?;
                values.push(val);
            }
        }

        let options = options.ok_or(TouchstoneError::MissingOptionLine)?;

        let per_point = nports
            .checked_mul(nports)
            .filter(|&cells| cells <= isize::MAX as usize)
            .and_then(|cells| cells.checked_mul(2))
            .and_then(|vals| vals.checked_add(1))
            .ok_or(TouchstoneError::InvalidPortCount(nports))?;
        if values.len() % per_point != 0 {
            return Err(TouchstoneError::TokenCount {
                expected: per_point,
                found: values.len(),
                nports,
            });
        }
        let npts = values.len() / per_point;

        let order = if npts > 0 { element_order(nports) } else { vec![] };
        let mut freqs: Vec<f64> = Vec::with_capacity(npts);
        let mut matrix = ComplexMatrix::zeros(nports, npts);
        let mut cursor = ValueCursor::new(&values);
        for pt in 0..npts {
            let freq = cursor.next().ok_or(TouchstoneError::TokenCount {
                expected: per_point,
                found: values.len(),
                nports,
            })?;
            freqs.push(freq);
            for &(out, inp) in order.iter() {
                let (x, y) = cursor.next_pair().ok_or(TouchstoneError::TokenCount {
                    expected: per_point,
                    found: values.len(),
                    nports,
                })?;
                matrix[[out, inp, pt]] = options.format.parse(x, y);
            }
        }

        let frequency = Frequency::from_scaled(&freqs, options.unit);

        let doc = TouchstoneDocument {
            comments,
            nports: Some(nports),
            parameter: Some(options.parameter),
            format: Some(options.format),
            impedance: options.impedance,
            frequency: Some(frequency),
            matrix: Some(matrix),
        };
        doc.validate()?;

        tracing::debug!(
            nports,
            npts,
            parameter = %options.parameter,
            format = %options.format,
            "read touchstone document"
        );
        Ok(doc)
    }
}

impl std::str::FromStr for TouchstoneDocument {
    type Err = TouchstoneError;

    /// Parse a one-port document. Use [`TouchstoneDocument::read`] for other sizes.
    fn from_str(s: &str) -> Result<Self> {
        TouchstoneDocument::read(s, 1)
    }
}
