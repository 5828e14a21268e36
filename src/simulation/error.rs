//! Error types and handling
//!
//! This module contains the error type returned by every generation step. A
//! failure always aborts the whole invocation; no partial tables are returned.

use crate::types::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur during scenario generation and export
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A count, duration or derived value is outside its allowed range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A parameter value could not be coerced to the expected type
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Assembled tables violate a cross-table reference
    #[error("Referential integrity violated: {0}")]
    IntegrityError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        match error {
            ConfigValidationError::InvalidOutputFormat(_) => {
                SimulationError::ConfigurationError(error.to_string())
            }
            _ => SimulationError::InvalidArgument(error.to_string()),
        }
    }
}

impl SimulationError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a referential integrity error
    pub fn integrity_error(msg: impl Into<String>) -> Self {
        Self::IntegrityError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidArgument(_) => "Invalid Argument",
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::IntegrityError(_) => "Integrity",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
            SimulationError::CsvError(_) => "CSV",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
