use thiserror::Error;

/// Errors raised while building, validating, reading or writing a Touchstone document.
#[derive(Debug, Error)]
pub enum TouchstoneError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("missing option line")]
    MissingOptionLine,

    #[error("line {line}: only one option line is supported")]
    DuplicateOptionLine { line: usize },

    #[error("line {line}: data found before the option line")]
    DataBeforeOptionLine { line: usize },

    #[error("line {line}: malformed option line: {message}")]
    MalformedOptionLine { line: usize, message: String },

    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("{found} data values is not a multiple of {expected} for a {nports}-port network")]
    TokenCount {
        expected: usize,
        found: usize,
        nports: usize,
    },

    #[error("number of ports must be a positive integer, got {0}")]
    InvalidPortCount(usize),

    #[error("{0} is not set")]
    MissingField(&'static str),

    #[error("matrix is not square: {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix has {found} ports, expected {expected}")]
    PortMismatch { expected: usize, found: usize },

    #[error("matrix has {found} frequency points, expected {expected}")]
    PointCountMismatch { expected: usize, found: usize },

    #[error("impedance has {found} values, expected {expected}")]
    ImpedanceLength { expected: usize, found: usize },

    #[error("ragged matrix: {message}")]
    RaggedMatrix { message: String },

    #[error("cannot infer port count from '{0}'")]
    UnknownPortCount(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TouchstoneError>;
