//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LauncherError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors
//! - Collaborator failures (non-zero exits, failed wipes) are *results*, not
//!   errors; only conditions the caller must react to are represented here

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Launch requested before the environment was provisioned.
    #[error("Environment not found at {path}. Run install first")]
    EnvironmentMissing { path: PathBuf },

    /// A delegated program could not be started at all.
    #[error("Failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = LauncherError::ConfigNotFound {
            path: PathBuf::from("/foo/launcher.yml"),
        };
        assert!(err.to_string().contains("/foo/launcher.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = LauncherError::ConfigParseError {
            path: PathBuf::from("/launcher.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/launcher.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn environment_missing_tells_user_to_install() {
        let err = LauncherError::EnvironmentMissing {
            path: PathBuf::from(".venv"),
        };
        let msg = err.to_string();
        assert!(msg.contains(".venv"));
        assert!(msg.contains("Run install first"));
    }

    #[test]
    fn spawn_failed_displays_command_and_message() {
        let err = LauncherError::SpawnFailed {
            command: "python3 installer.py".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3 installer.py"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: LauncherError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
