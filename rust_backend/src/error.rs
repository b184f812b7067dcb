//! Error types for the fallible edges of the crate.
//!
//! The derivations themselves are total and never return these. Only JSON
//! decoding, configuration loading and memo key computation can fail.

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Error type for core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Parse error at '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Build a parse error from a located serde_json failure.
    pub fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        CoreError::Parse {
            path,
            message: err.into_inner().to_string(),
        }
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(e: toml::de::Error) -> Self {
        CoreError::Configuration(format!("Failed to parse config: {}", e))
    }
}
