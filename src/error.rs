//! Error types for the catalog watcher.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Missing required environment variable: {0}")]
    MissingCredential(&'static str),
    #[error("Invalid configuration value for '{field}': {details}")]
    InvalidConfiguration { field: &'static str, details: String },
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
    #[error("Failed to decode response: {0}")]
    DecodeError(String),
    #[error("Server error: {0}")]
    ServerError(String),
    #[error("Background task failed: {0}")]
    TaskError(String),
}

impl From<reqwest::Error> for WatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WatchError::Timeout(err.to_string())
        } else if err.is_decode() {
            WatchError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            WatchError::UnexpectedStatus {
                status: status.as_u16(),
                url: err
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "<unknown>".to_string()),
            }
        } else {
            WatchError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WatchError {
    fn from(err: serde_json::Error) -> Self {
        WatchError::DecodeError(format!("JSON error: {err}"))
    }
}

impl From<::config::ConfigError> for WatchError {
    fn from(err: ::config::ConfigError) -> Self {
        WatchError::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;
