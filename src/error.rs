//! Error types for pydep operations.
//!
//! This module defines [`PydepError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PydepError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PydepError::Other`) for unexpected errors
//! - Nothing is caught mid-run: the first error unwinds to `main`, which
//!   prints it and exits non-zero

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pydep operations.
#[derive(Debug, Error)]
pub enum PydepError {
    /// Source file missing or not a regular file.
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The source file is not syntactically valid Python.
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// The availability probe raised or exited abnormally for a module.
    #[error("Availability check failed for '{module}': {message}")]
    ResolutionFailed { module: String, message: String },

    /// The Python interpreter used for availability probes could not be spawned.
    #[error("Failed to launch Python interpreter '{interpreter}': {source}")]
    InterpreterLaunchFailed {
        interpreter: String,
        source: std::io::Error,
    },

    /// Install command template is missing the module placeholder.
    #[error("Invalid install command template: {message}")]
    InvalidTemplate { message: String },

    /// Module name is not safe to embed in generated shell text.
    #[error("Invalid module name '{name}': expected letters, digits, and underscores only")]
    InvalidModuleName { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pydep operations.
pub type Result<T> = std::result::Result<T, PydepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_not_found_displays_path() {
        let err = PydepError::SourceNotFound {
            path: PathBuf::from("/tmp/missing.py"),
        };
        assert!(err.to_string().contains("/tmp/missing.py"));
    }

    #[test]
    fn parse_error_displays_path_and_message() {
        let err = PydepError::ParseError {
            path: PathBuf::from("/tmp/broken.py"),
            message: "invalid syntax at line 3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/broken.py"));
        assert!(msg.contains("invalid syntax at line 3"));
    }

    #[test]
    fn resolution_failed_displays_module_and_message() {
        let err = PydepError::ResolutionFailed {
            module: "numpy".into(),
            message: "probe exited with code 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("numpy"));
        assert!(msg.contains("probe exited with code 1"));
    }

    #[test]
    fn interpreter_launch_failed_displays_interpreter() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = PydepError::InterpreterLaunchFailed {
            interpreter: "python3".into(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("python3"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn invalid_template_displays_message() {
        let err = PydepError::InvalidTemplate {
            message: "missing '{module}' placeholder".into(),
        };
        assert!(err.to_string().contains("{module}"));
    }

    #[test]
    fn invalid_module_name_displays_name() {
        let err = PydepError::InvalidModuleName {
            name: "numpy; rm -rf /".into(),
        };
        assert!(err.to_string().contains("numpy; rm -rf /"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PydepError = io_err.into();
        assert!(matches!(err, PydepError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PydepError::InvalidTemplate {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
