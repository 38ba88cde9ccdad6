use crate::error::{Result, TouchstoneError};
use crate::format::NumericFormat;
use crate::impedance::Impedance;
use crate::parameter::RFParameter;
use crate::scale::FrequencyUnit;
use std::fmt;

/// Decoded `# <unit> <parameter> <format> R <impedance...>` line.
///
/// Every field is optional in the file and falls back to `GHZ S MA R 50`.
/// Fields that are present must appear in that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionLine {
    pub unit: FrequencyUnit,
    pub parameter: RFParameter,
    pub format: NumericFormat,
    pub impedance: Impedance,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
enum Slot {
    Unit,
    Parameter,
    Format,
    Done,
}

fn slot_of(token: &str) -> Option<Slot> {
    if token.parse::<FrequencyUnit>().is_ok() {
        Some(Slot::Unit)
    } else if token.parse::<RFParameter>().is_ok() {
        Some(Slot::Parameter)
    } else if token.parse::<NumericFormat>().is_ok() {
        Some(Slot::Format)
    } else {
        None
    }
}

impl OptionLine {
    /// Parse an option line. `line` is its 1-based position, used in errors.
    pub fn parse(text: &str, line: usize) -> Result<OptionLine> {
        let malformed = |message: String| TouchstoneError::MalformedOptionLine { line, message };

        let body = text
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| malformed("missing leading '#'".to_string()))?;

        let mut opts = OptionLine::default();
        let mut next = Slot::Unit;
        let mut tokens = body.split_whitespace();

        while let Some(token) = tokens.next() {
            if token.eq_ignore_ascii_case("r") {
                let values = tokens
                    .by_ref()
                    .map(|t| {
                        t.parse::<f64>()
                            .map_err(|_| malformed(format!("invalid reference impedance '{}'", t)))
                    })
                    .collect::<Result<Vec<f64>>>()?;
                opts.impedance = Impedance::from_values(values)
                    .ok_or_else(|| malformed("'R' without a reference impedance".to_string()))?;
                next = Slot::Done;
                continue;
            }

            let slot = match slot_of(token) {
                Some(slot) => slot,
                // Unknown token: report it against the next field expected
                None => {
                    return Err(match next {
                        Slot::Unit => TouchstoneError::UnknownUnit(token.to_string()),
                        Slot::Parameter => TouchstoneError::UnknownParameter(token.to_string()),
                        Slot::Format => TouchstoneError::UnknownFormat(token.to_string()),
                        Slot::Done => malformed(format!("unexpected token '{}'", token)),
                    });
                }
            };
            if slot < next {
                return Err(malformed(format!("'{}' is repeated or out of order", token)));
            }

            match slot {
                Slot::Unit => {
                    opts.unit = token.parse()?;
                    next = Slot::Parameter;
                }
                Slot::Parameter => {
                    opts.parameter = token.parse()?;
                    next = Slot::Format;
                }
                Slot::Format => {
                    opts.format = token.parse()?;
                    next = Slot::Done;
                }
                Slot::Done => {}
            }
        }

        tracing::trace!(
            unit = %opts.unit,
            parameter = %opts.parameter,
            format = %opts.format,
            impedance = %opts.impedance,
            "decoded option line"
        );
        Ok(opts)
    }
}

impl fmt::Display for OptionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "# {} {} {} R {}",
            self.unit, self.parameter, self.format, self.impedance
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn option_line_full() {
        let opts = OptionLine::parse("# MHz S MA R 50", 1).unwrap();
        assert_eq!(opts.unit, FrequencyUnit::MHz);
        assert_eq!(opts.parameter, RFParameter::S);
        assert_eq!(opts.format, NumericFormat::MA);
        assert_eq!(opts.impedance, Impedance::Scalar(50.0));
    }

    #[test]
    fn option_line_case_insensitive() {
        let opts = OptionLine::parse("  #khz y db r 75.5", 1).unwrap();
        assert_eq!(opts.unit, FrequencyUnit::KHz);
        assert_eq!(opts.parameter, RFParameter::Y);
        assert_eq!(opts.format, NumericFormat::DB);
        assert_eq!(opts.impedance, Impedance::Scalar(75.5));
    }

    #[test]
    fn option_line_defaults() {
        assert_eq!(OptionLine::parse("#", 1).unwrap(), OptionLine::default());
        let opts = OptionLine::default();
        assert_eq!(opts.unit, FrequencyUnit::GHz);
        assert_eq!(opts.parameter, RFParameter::S);
        assert_eq!(opts.format, NumericFormat::MA);
        assert_eq!(opts.impedance, Impedance::Scalar(50.0));
    }

    #[test]
    fn option_line_partial() {
        let opts = OptionLine::parse("# Z RI", 1).unwrap();
        assert_eq!(opts.unit, FrequencyUnit::GHz);
        assert_eq!(opts.parameter, RFParameter::Z);
        assert_eq!(opts.format, NumericFormat::RI);

        let opts = OptionLine::parse("# Hz R 25", 1).unwrap();
        assert_eq!(opts.unit, FrequencyUnit::Hz);
        assert_eq!(opts.parameter, RFParameter::S);
        assert_eq!(opts.impedance, Impedance::Scalar(25.0));
    }

    #[test]
    fn option_line_per_port_impedance() {
        let opts = OptionLine::parse("# GHz S RI R 50 75 100", 1).unwrap();
        assert_eq!(opts.impedance, Impedance::PerPort(vec![50.0, 75.0, 100.0]));
    }

    #[test]
    fn option_line_unknown_tokens() {
        match OptionLine::parse("# THz S MA R 50", 1) {
            Err(TouchstoneError::UnknownUnit(token)) => assert_eq!(token, "THz"),
            other => panic!("expected UnknownUnit, got {:?}", other),
        }
        match OptionLine::parse("# GHz Q MA R 50", 1) {
            Err(TouchstoneError::UnknownParameter(token)) => assert_eq!(token, "Q"),
            other => panic!("expected UnknownParameter, got {:?}", other),
        }
        match OptionLine::parse("# GHz S XX R 50", 1) {
            Err(TouchstoneError::UnknownFormat(token)) => assert_eq!(token, "XX"),
            other => panic!("expected UnknownFormat, got {:?}", other),
        }
    }

    #[test]
    fn option_line_malformed() {
        for text in [
            "# GHz S MA R",
            "# GHz S MA R fifty",
            "# S GHz MA",
            "# GHz GHz",
            "# GHz S MA R 50 S",
            "# GHz S MA junk",
            "GHz S MA R 50",
        ] {
            match OptionLine::parse(text, 7) {
                Err(TouchstoneError::MalformedOptionLine { line, .. }) => assert_eq!(line, 7),
                other => panic!("expected MalformedOptionLine for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn option_line_display() {
        let opts = OptionLine::parse("# mhz z ri r 50 75", 1).unwrap();
        assert_eq!(opts.to_string(), "# MHZ Z RI R 50 75");
        assert_eq!(OptionLine::default().to_string(), "# GHZ S MA R 50");
    }
}
