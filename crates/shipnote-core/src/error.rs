//! Error types for shipnote

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShipnoteError
pub type Result<T> = std::result::Result<T, ShipnoteError>;

/// Main error type for shipnote operations
#[derive(Debug, Error)]
pub enum ShipnoteError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input rejected before formatting
    #[error("Input too large: {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err: ShipnoteError = ConfigError::InvalidValue {
            field: "links.unknown_url".to_string(),
            message: "must be an absolute URL".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: links.unknown_url - must be an absolute URL"
        );
    }

    #[test]
    fn test_input_too_large_message() {
        let err = ShipnoteError::InputTooLarge { size: 10, limit: 4 };
        assert!(err.to_string().contains("10 bytes"));
    }
}
