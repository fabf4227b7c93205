//! Conversion error types.

use thiserror::Error;

/// Raised when no parse strategy accepts the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unbekanntes Datumsformat: {input:?}")]
pub struct DateFormatError {
    input: String,
}

impl DateFormatError {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }

    /// The raw value that could not be parsed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Result type alias for conversion operations.
pub type ConversionResult<T> = std::result::Result<T, DateFormatError>;
