//! Error handling module for the minit CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the minit CLI application.
#[derive(Error, Debug)]
pub enum MinitError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input contained lexical errors; they have already been reported.
    #[error("aborting due to {0} lexical error(s)")]
    Lex(usize),
}

/// Result type alias using MinitError.
pub type Result<T> = std::result::Result<T, MinitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MinitError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = MinitError::FileOperation("cannot read main.mini".to_string());
        assert_eq!(err.to_string(), "File operation failed: cannot read main.mini");
    }

    #[test]
    fn test_lex_error_display() {
        assert_eq!(
            MinitError::Lex(2).to_string(),
            "aborting due to 2 lexical error(s)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let minit_err: MinitError = io_err.into();
        assert!(matches!(minit_err, MinitError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let minit_err: MinitError = json_err.into();
        assert!(matches!(minit_err, MinitError::Json(_)));
    }
}
