//! Scan results and display formatting.

use std::path::PathBuf;

use serde::Serialize;

/// Everything one scan run discovered and produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// File that was scanned.
    pub source: PathBuf,
    /// Every top-level module the file imports, in discovery order.
    pub modules: Vec<String>,
    /// The subset of `modules` that is not installed, in discovery order.
    pub missing: Vec<String>,
    /// Install script path, when one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<PathBuf>,
}

/// Format names the way Python prints a list of strings: `['a', 'b']`.
pub fn python_list_repr(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}
