//! Error types for the indicator API

/// Errors that can occur in the indicator API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid indicator definitions: {0}")]
    Definitions(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for indicator API operations
pub type Result<T> = std::result::Result<T, ApiError>;
