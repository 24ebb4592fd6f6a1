//! pydep - Scan a Python source file for missing dependencies.
//!
//! pydep parses a Python file, collects the top-level modules it imports,
//! asks an availability oracle which of them are installed, and generates
//! an executable shell script that installs the missing ones through the
//! system package manager.
//!
//! # Modules
//!
//! - [`availability`] - Module availability oracles (live interpreter, fixed set)
//! - [`cli`] - Command-line interface and scan orchestration
//! - [`config`] - Validated run configuration
//! - [`error`] - Error types and result aliases
//! - [`imports`] - Python import extraction
//! - [`report`] - Scan results and display formatting
//! - [`script`] - Install-script templates and generation
//!
//! # Example
//!
//! ```
//! use pydep::script::InstallTemplate;
//!
//! let template = InstallTemplate::new("sudo apt install -y python3-{module}").unwrap();
//! assert_eq!(template.render("numpy"), "sudo apt install -y python3-numpy");
//! ```
//!
//! For end-to-end scanning, see the integration tests.

pub mod availability;
pub mod cli;
pub mod config;
pub mod error;
pub mod imports;
pub mod report;
pub mod script;

pub use error::{PydepError, Result};
