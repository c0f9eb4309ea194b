//! Error types for bankdesk-core
//!
//! Failures of the client-side state: session storage and record
//! (de)serialization. Network failures live in bankdesk-client.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Session storage could not be read or written
    SessionIo,
    /// Stored session data is not a valid user record
    CorruptSession,
    /// Record could not be serialized or deserialized
    InvalidFormat,
    /// Unknown view identifier
    UnknownView,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::SessionIo => write!(f, "SESSION_IO"),
            ErrorCode::CorruptSession => write!(f, "CORRUPT_SESSION"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
            ErrorCode::UnknownView => write!(f, "UNKNOWN_VIEW"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Warning,
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session storage error: {0}")]
    SessionIo(#[from] io::Error),

    #[error("Corrupt session data under '{key}': {message}")]
    CorruptSession { key: String, message: String },

    #[error("Invalid record format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("Unknown view: {name}")]
    UnknownView { name: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::SessionIo(_) => ErrorCode::SessionIo,
            CoreError::CorruptSession { .. } => ErrorCode::CorruptSession,
            CoreError::InvalidFormat(_) => ErrorCode::InvalidFormat,
            CoreError::UnknownView { .. } => ErrorCode::UnknownView,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::SessionIo(_) => ErrorSeverity::Error,
            CoreError::CorruptSession { .. } => ErrorSeverity::Warning,
            CoreError::InvalidFormat(_) => ErrorSeverity::Error,
            CoreError::UnknownView { .. } => ErrorSeverity::Warning,
        }
    }

    /// Log through the level matching the severity
    pub fn log(&self, operation: &str) {
        match self.severity() {
            ErrorSeverity::Warning => log::warn!(target: "bankdesk::error", "[{}] {}: {}", self.code(), operation, self),
            ErrorSeverity::Error => log::error!(target: "bankdesk::error", "[{}] {}: {}", self.code(), operation, self),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
