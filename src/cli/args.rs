//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_INTERPRETER;
use crate::script::{DEFAULT_INSTALL_COMMAND, DEFAULT_SCRIPT_NAME};

/// Scan a Python source file for missing dependencies and generate an
/// install script for them.
#[derive(Debug, Parser)]
#[command(name = "pydep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Python source file to scan
    pub file: PathBuf,

    /// Where to write the generated install script
    #[arg(short, long, default_value = DEFAULT_SCRIPT_NAME)]
    pub output: PathBuf,

    /// Install command template; `{module}` is replaced with each missing
    /// module name
    #[arg(long, value_name = "TEMPLATE", default_value = DEFAULT_INSTALL_COMMAND)]
    pub install_command: String,

    /// Python interpreter used to check module availability
    #[arg(long, env = "PYDEP_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub python: String,

    /// Print the scan result as JSON instead of plain messages
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_file_argument_with_defaults() {
        let cli = Cli::parse_from(["pydep", "app.py"]);
        assert_eq!(cli.file, PathBuf::from("app.py"));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_SCRIPT_NAME));
        assert_eq!(cli.install_command, DEFAULT_INSTALL_COMMAND);
        assert_eq!(cli.python, DEFAULT_INTERPRETER);
        assert!(!cli.json);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_overridden_options() {
        let cli = Cli::parse_from([
            "pydep",
            "app.py",
            "--output",
            "deps.sh",
            "--install-command",
            "pip install {module}",
            "--python",
            "python3.12",
            "--json",
        ]);
        assert_eq!(cli.output, PathBuf::from("deps.sh"));
        assert_eq!(cli.install_command, "pip install {module}");
        assert_eq!(cli.python, "python3.12");
        assert!(cli.json);
    }

    #[test]
    fn rejects_a_missing_file_argument() {
        assert!(Cli::try_parse_from(["pydep"]).is_err());
    }
}
