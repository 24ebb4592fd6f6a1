//! Command-line interface for pydep.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the scan orchestration.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Scan execution (extract, check, generate)

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::RunCommand;
