//! Core error types for the VibeShift application.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! failures are converted to these types at the storage boundary.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use vibeshift_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Holding operation failed: {0}")]
    Holding(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for key-value storage operations.
///
/// Uses `String` for all details so storage backends can convert their own
/// error types into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The requested key was not found.
    #[error("Key not found: {0}")]
    NotFound(String),

    /// A read from the store failed.
    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    /// A write to the store failed.
    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    /// A stored value could not be serialized or deserialized.
    #[error("Storage serialization failed: {0}")]
    Serialization(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
