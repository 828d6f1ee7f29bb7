//! Error types for the farm client

/// Errors that can occur inside the client adapters
#[derive(Debug, thiserror::Error)]
pub enum FarmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token storage error: {0}")]
    Storage(String),
}

/// Result type alias for farm client operations
pub type Result<T> = std::result::Result<T, FarmError>;
