//! Error types and handling for `travelbrief`

use thiserror::Error;

/// Main error type for the enrichment library
#[derive(Error, Debug)]
pub enum TravelBriefError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Trip request validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TravelBriefError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether the error rejects the caller's request rather than signalling a fault
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, TravelBriefError::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelBriefError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            TravelBriefError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelBriefError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TravelBriefError::General { message } => message.clone(),
        }
    }
}

/// Failure of a single provider call.
///
/// Never leaves a provider: every public provider method turns it into
/// the documented fallback value.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl FetchError {
    /// True when the underlying transport hit the request timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network(e) if e.is_timeout())
    }
}
