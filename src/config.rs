//! Validated run configuration.
//!
//! A [`ScanConfig`] carries everything one run needs: the source file, the
//! output script path, the install command template, and the interpreter
//! used for availability probes. Building it from CLI arguments and
//! validating it up front keeps the pipeline itself free of argument
//! handling.

use std::path::PathBuf;

use crate::error::{PydepError, Result};
use crate::script::{InstallTemplate, DEFAULT_SCRIPT_NAME};

/// Default interpreter command for availability probes.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Configuration for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Python source file to scan.
    pub source: PathBuf,
    /// Where the install script is written when modules are missing.
    pub output: PathBuf,
    /// Install command template for the generated script.
    pub install_command: InstallTemplate,
    /// Interpreter command used by the availability probe.
    pub interpreter: String,
}

impl ScanConfig {
    /// Build a config for `source` with default output path, template, and
    /// interpreter.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: PathBuf::from(DEFAULT_SCRIPT_NAME),
            install_command: InstallTemplate::default(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }

    /// Check that the configuration points at scannable input.
    pub fn validate(&self) -> Result<()> {
        if !self.source.is_file() {
            return Err(PydepError::SourceNotFound {
                path: self.source.clone(),
            });
        }
        Ok(())
    }
}
