//! Error types for Feedsynth
//!
//! Structured error definitions use thiserror; anyhow errors coming from
//! outer layers are folded into [`FeedsynthError::Other`].
//!
//! The scorer and the allocator never produce errors. Everything here belongs
//! to the configuration, file and command-line boundary.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for Feedsynth operations
#[derive(Error, Debug)]
pub enum FeedsynthError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller supplied input that cannot be used (e.g. an empty date range)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Feedsynth operations
pub type Result<T> = std::result::Result<T, FeedsynthError>;

/// Convert anyhow::Error to FeedsynthError
impl From<anyhow::Error> for FeedsynthError {
    fn from(err: anyhow::Error) -> Self {
        FeedsynthError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedsynthError::InvalidInput("end date precedes start date".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: end date precedes start date"
        );
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json }");
        assert!(json_err.is_err());

        let err: FeedsynthError = json_err.unwrap_err().into();
        assert!(matches!(err, FeedsynthError::Serialization(_)));

        let err: FeedsynthError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
