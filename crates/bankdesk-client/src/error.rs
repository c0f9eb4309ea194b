//! Error types for bankdesk-client

use thiserror::Error;

/// The request could not complete
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("could not encode request body: {0}")]
    Encode(String),

    #[error("{0}")]
    Connect(String),

    #[error("could not read response body: {0}")]
    Body(String),
}

/// Why an API call produced no result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// Non-success status; message comes from the body's `error` field
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    /// Body was not JSON at all
    #[error("Network error: {0}")]
    InvalidJson(String),

    /// JSON did not have the expected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedShape { endpoint: String, message: String },
}

impl ApiFailure {
    /// Text shown to the user
    pub fn alert_message(&self) -> String {
        self.to_string()
    }
}

/// A view fragment could not be loaded
#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("View not found")]
    NotFound { view: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_messages() {
        let failure = ApiFailure::Status { status: 400, message: "Insufficient funds".to_string() };
        assert_eq!(failure.alert_message(), "Insufficient funds");

        let failure = ApiFailure::from(TransportError::Connect("connection refused".to_string()));
        assert_eq!(failure.alert_message(), "Network error: connection refused");
    }

    #[test]
    fn test_fragment_not_found_message() {
        let err = FragmentError::NotFound { view: "reports".to_string() };
        assert_eq!(err.to_string(), "View not found");
    }
}
