//! Error types for the client registry.
//!
//! Expected outcomes are values, not errors: a missing record is `None`, a
//! duplicate identifier on insert is `Ok(false)`, and a missing identifier
//! on update/delete is `Ok(false)`. The variants here cover the failures
//! that cannot be expressed as a result value.

use std::error::Error as StdError;
use std::fmt;
use std::result;

/// A specialized Result type for registry operations.
pub type Result<T> = result::Result<T, Error>;

/// The error type for registry operations.
#[derive(Debug)]
pub enum Error {
    /// Storage engine faults (I/O, corruption, bad SQL). The duplicate-key
    /// violation is the one engine signal deliberately not mapped here.
    Storage(String),
    /// Configuration errors
    Config(String),
    /// Record validation errors
    Validation(String),
    /// I/O errors
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<duckdb::Error> for Error {
    fn from(err: duckdb::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
