//! Error types for RADOLAN decoding.

use thiserror::Error;

/// Result type alias using RadolanError.
pub type RadolanResult<T> = Result<T, RadolanError>;

/// Primary error type for composite decoding.
///
/// Every variant except [`RadolanError::UnknownUnit`] aborts the decode of the
/// composite it was raised for. `UnknownUnit` is only ever reported as a
/// warning attached to an otherwise usable composite.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RadolanError {
    // === Header Errors ===
    #[error("header corrupted: too short")]
    HeaderTooShort,

    #[error("could not parse capture time: {0}")]
    BadCaptureTime(String),

    #[error("could not parse data length: {0}")]
    BadDataLength(String),

    #[error("could not parse forecast time: {0}")]
    BadForecastOffset(String),

    #[error("could not parse interval: {0}")]
    BadInterval(String),

    #[error("could not parse dimensions: {0}")]
    BadDimensions(String),

    #[error("no dimensions available for product {0}")]
    MissingDimensions(String),

    #[error("could not parse format version: {0}")]
    BadFormatVersion(String),

    #[error("could not parse precision: {0}")]
    BadPrecision(String),

    #[error("invalid level format: {0}")]
    BadLevelFormat(String),

    // === Payload Errors ===
    #[error("invalid offset value {value} in line {line} at byte {position}")]
    InvalidOffset {
        line: usize,
        position: usize,
        value: u8,
    },

    #[error("destination size exceeded in line {line}: width is {width}")]
    DestinationOverflow { line: usize, width: usize },

    #[error("payload truncated: expected {expected} more bytes, got {available}")]
    TruncatedPayload { expected: usize, available: usize },

    #[error("unknown encoding: {data_length} payload bytes for a {width}x{height} plane")]
    UnknownEncoding {
        data_length: i64,
        width: usize,
        height: usize,
    },

    // === Degradations ===
    #[error("unknown unit for product {0}")]
    UnknownUnit(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid decoder configuration: {0}")]
    InvalidConfig(String),
}

impl RadolanError {
    /// Whether the error aborts decoding of the affected composite.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RadolanError::UnknownUnit(_))
    }

    /// Stable machine-readable name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            RadolanError::HeaderTooShort => "HeaderTooShort",
            RadolanError::BadCaptureTime(_) => "BadCaptureTime",
            RadolanError::BadDataLength(_) => "BadDataLength",
            RadolanError::BadForecastOffset(_) => "BadForecastOffset",
            RadolanError::BadInterval(_) => "BadInterval",
            RadolanError::BadDimensions(_) => "BadDimensions",
            RadolanError::MissingDimensions(_) => "MissingDimensions",
            RadolanError::BadFormatVersion(_) => "BadFormatVersion",
            RadolanError::BadPrecision(_) => "BadPrecision",
            RadolanError::BadLevelFormat(_) => "BadLevelFormat",
            RadolanError::InvalidOffset { .. } => "InvalidOffset",
            RadolanError::DestinationOverflow { .. } => "DestinationOverflow",
            RadolanError::TruncatedPayload { .. } => "TruncatedPayload",
            RadolanError::UnknownEncoding { .. } => "UnknownEncoding",
            RadolanError::UnknownUnit(_) => "UnknownUnit",
            RadolanError::Io(_) => "Io",
            RadolanError::InvalidConfig(_) => "InvalidConfig",
        }
    }
}

impl From<std::io::Error> for RadolanError {
    fn from(err: std::io::Error) -> Self {
        RadolanError::Io(err.to_string())
    }
}
