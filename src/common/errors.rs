//! Error types for the application

use thiserror::Error;

/// Result type alias using our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Reasons a proposed strategy configuration is rejected
///
/// All variants are terminal for that configuration attempt: no engine is
/// created and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field is missing, non-numeric, or outside its allowed range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// More wins requested than there are trades in the sequence
    #[error("Target wins ({target_wins}) exceeds total trades ({total_trades})")]
    TargetExceedsTrades { target_wins: u32, total_trades: u32 },

    /// The probability of reaching the target is exactly zero
    #[error("Target is impossible: success probability is zero, target capital undefined")]
    ImpossibleTarget,
}

impl ConfigError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::InvalidInput(msg.into())
    }
}

/// Main error type for the host application
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration file or environment errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Strategy parameters rejected by the engine
    #[error("Strategy error: {0}")]
    Strategy(#[from] ConfigError),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::TargetExceedsTrades {
            target_wins: 7,
            total_trades: 5,
        };
        assert_eq!(err.to_string(), "Target wins (7) exceeds total trades (5)");

        let err = ConfigError::invalid("capital must be positive");
        assert_eq!(err.to_string(), "Invalid input: capital must be positive");
    }

    #[test]
    fn test_app_error_from_config_error() {
        let err: AppError = ConfigError::ImpossibleTarget.into();
        assert!(matches!(err, AppError::Strategy(ConfigError::ImpossibleTarget)));
    }
}
