use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    /// A section was configured without a CSV URL.
    EmptyUrl,
    /// The CSV endpoint answered with a non-success status.
    Http(u16),
    /// Transport-level fetch failure.
    Network(String),
    /// The pipeline produced zero valid rows for its section.
    NoData(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyUrl => write!(f, "CSV URL is empty"),
            AppError::Http(status) => write!(f, "CSV fetch failed (HTTP {})", status),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::NoData(msg) => write!(f, "{}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
