//! Scan execution: extract, check, generate.

use crate::availability::AvailabilityOracle;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::imports;
use crate::report::{python_list_repr, ScanReport};
use crate::script;

/// Runs one scan against a configuration and an availability oracle.
#[derive(Debug)]
pub struct RunCommand {
    config: ScanConfig,
    json: bool,
}

impl RunCommand {
    /// Create a run for `config`. With `json` set, the plain stdout
    /// messages are replaced by a single JSON report.
    pub fn new(config: ScanConfig, json: bool) -> Self {
        Self { config, json }
    }

    /// Extract imports, check each against the oracle, and generate the
    /// install script when anything is missing.
    ///
    /// Checks run in discovery order and the first oracle error aborts the
    /// run; modules after it are never checked.
    pub fn execute(&self, oracle: &dyn AvailabilityOracle) -> Result<ScanReport> {
        let modules = imports::imported_modules(&self.config.source)?;

        let mut missing = Vec::new();
        for module in &modules {
            if oracle.is_available(module)? {
                tracing::debug!("'{}' is installed", module);
            } else {
                tracing::debug!("'{}' is missing", module);
                missing.push(module.clone());
            }
        }

        let mut report = ScanReport {
            source: self.config.source.clone(),
            modules,
            missing,
            script: None,
        };

        if report.missing.is_empty() {
            if !self.json {
                println!("All dependencies are already installed.");
            }
        } else {
            if !self.json {
                println!("Missing modules: {}", python_list_repr(&report.missing));
            }
            script::write_install_script(
                &self.config.output,
                &report.missing,
                &self.config.install_command,
            )?;
            report.script = Some(self.config.output.clone());
            if !self.json {
                println!("Install script generated: {}", self.config.output.display());
            }
        }

        if self.json {
            let rendered = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
        }

        Ok(report)
    }
}
