//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::describe_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error returned when a lookup cannot produce a `LookupResult`.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The lookup service answered with a structured `error` object.
    #[error("Error: {message}")]
    Service {
        /// Message provided by the service
        message: String,
    },

    /// The public-IP service answered with something that is not an address.
    #[error("Connection Error: public IP service returned {message}")]
    PublicIp {
        /// Description of the unusable response
        message: String,
    },

    /// Transport-level failure, or a body that is not the expected JSON.
    #[error("Connection Error: {}", describe_reqwest_error(.0))]
    Connection(#[from] ReqwestError),
}

impl LookupError {
    /// Returns the error category used for logging and reporting.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::Service { .. } => ErrorType::ServiceError,
            LookupError::PublicIp { .. } | LookupError::Connection(_) => {
                ErrorType::ConnectionError
            }
        }
    }
}

/// Error returned when an HTML report cannot be written.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating or writing the report file failed.
    #[error("Failed to write report {}: {source}", .path.display())]
    FileWrite {
        /// Path of the report that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Returns the error category used for logging and reporting.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExportError::FileWrite { .. } => ErrorType::FileWriteError,
        }
    }
}

/// Categories of failures that can end an iteration of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum ErrorType {
    /// Remote service returned a structured error
    ServiceError,
    /// Transport failure or unusable response
    ConnectionError,
    /// Report file could not be written
    FileWriteError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Short human-readable name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ServiceError => "Service error",
            ErrorType::ConnectionError => "Connection error",
            ErrorType::FileWriteError => "File write error",
        }
    }
}
