//! Custom error types for acctree
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for acctree operations
#[derive(Error, Debug)]
pub enum AcctreeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed JSON in the document file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Rejected input: empty required field, duplicate key, reserved key
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl AcctreeError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for services
    pub fn service_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Service",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for files
    pub fn file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for AcctreeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AcctreeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for acctree operations
pub type AcctreeResult<T> = Result<T, AcctreeError>;
