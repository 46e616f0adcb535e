//! Error types for The Identity Codex

use thiserror::Error;

/// Main error type for codex operations
#[derive(Error, Debug)]
pub enum CodexError {
    /// A hook was called outside the component tree of its provider
    #[error("{0} must be used within its provider")]
    MissingProvider(&'static str),

    /// Visitor email rejected before submission
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Configuration value is missing or out of range
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a JSON config file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CodexError
pub type CodexResult<T> = Result<T, CodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodexError::MissingProvider("use_threat_mode");
        assert_eq!(format!("{}", err), "use_threat_mode must be used within its provider");

        let err = CodexError::InvalidEmail("missing @".to_string());
        assert_eq!(format!("{}", err), "Invalid email: missing @");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let codex_err: CodexError = io_err.into();
        assert!(matches!(codex_err, CodexError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let codex_err: CodexError = json_err.into();
        assert!(matches!(codex_err, CodexError::Json(_)));
    }
}
