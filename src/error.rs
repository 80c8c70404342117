//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the error type returned by the
//! launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing engine base is not an error: resolution returns `Option`
//! - Failing to start the engine base is the only error that is allowed to
//!   escape the supervisor, so the process can exit abnormally
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The engine base executable could not be started.
    #[error("Failed to start {}: {source}", path.display())]
    ProcessStart {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The installer protocol handler could not be invoked.
    #[error("Failed to invoke installer '{uri}': {message}")]
    InstallerFailed { uri: String, message: String },

    /// A prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

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
    use std::error::Error as _;

    #[test]
    fn process_start_displays_path_and_cause() {
        let err = LauncherError::ProcessStart {
            path: PathBuf::from("/sdk/hl2.exe"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/sdk/hl2.exe"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn process_start_exposes_source() {
        let err = LauncherError::ProcessStart {
            path: PathBuf::from("hl2.exe"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn installer_failed_displays_uri_and_message() {
        let err = LauncherError::InstallerFailed {
            uri: "steam://run/218".into(),
            message: "no handler".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("steam://run/218"));
        assert!(msg.contains("no handler"));
    }

    #[test]
    fn prompt_displays_message() {
        let err = LauncherError::Prompt {
            message: "not a terminal".into(),
        };
        assert!(err.to_string().contains("not a terminal"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: LauncherError = anyhow::anyhow!("unexpected").into();
        assert!(matches!(err, LauncherError::Other(_)));
        assert_eq!(err.to_string(), "unexpected");
    }
}
