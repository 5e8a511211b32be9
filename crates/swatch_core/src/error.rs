use thiserror::Error;

/// Failure to parse a hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("expected 3, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit in color `{0}`")]
    InvalidDigit(String),
}
