//! Error types for the Vibify client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! A non-2xx response is not an error: it comes back as a normal
//! [`ApiResponse`](crate::http::ApiResponse) for the caller to branch on.

use thiserror::Error;

/// The main error type for the Vibify client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("No credentials configured: an application id or an API key is required")]
    MissingCredentials,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to build request: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Expected a JSON body but the response (HTTP {status}) was plain text")]
    UnexpectedBody { status: u16 },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// True for failures where no response was received from the server
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// True for failures raised while building the client
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingCredentials
                | Error::Config { .. }
                | Error::MissingConfigField { .. }
                | Error::InvalidUrl(_)
                | Error::ConfigRead { .. }
        )
    }
}

/// Result type alias for the Vibify client
pub type Result<T> = std::result::Result<T, Error>;
