// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for monodetect.
//!
//! Detection itself almost never fails: missing files and malformed
//! manifests degrade to "absent". What remains are filesystem failures
//! other than "not found", configuration problems and output encoding.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for monodetect operations.
#[derive(Error, Debug)]
pub enum MonoError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors (permission denied and friends; "not found" never gets here)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Output rendering errors
    #[error("Output error: {message}")]
    Output { message: String },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<serde_json::Error> for MonoError {
    fn from(err: serde_json::Error) -> Self {
        MonoError::Output {
            message: err.to_string(),
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias for monodetect operations.
pub type Result<T> = std::result::Result<T, MonoError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MonoError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
