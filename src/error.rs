//! Error types for gpsr

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gpsr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tls(#[from] TlsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Output(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Output(err.to_string())
    }
}

/// Errors from the group and directory services
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied by {0}. Check that the client certificate is authorized.")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error from {url}: {message}")]
    ServerError { url: String, message: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "remote service".to_string());
        if err.is_timeout() {
            ApiError::Network(format!("Request to {} timed out", url))
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to {}: {}", url, err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Client certificate and TLS setup errors
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid client certificate or key ({cert} / {key}): {message}")]
    InvalidIdentity {
        cert: PathBuf,
        key: PathBuf,
        message: String,
    },

    #[error("Invalid CA bundle {path}: {message}")]
    InvalidCaBundle { path: PathBuf, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}
