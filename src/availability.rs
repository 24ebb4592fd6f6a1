//! Module availability oracles.
//!
//! Whether a module counts as "installed" is answered through the
//! [`AvailabilityOracle`] trait so the check can be swapped out: the
//! production oracle asks a live Python interpreter, while tests (or
//! embedders with a lockfile or package index to consult) supply their
//! own implementation.

use std::collections::HashSet;
use std::process::Command;

use crate::error::{PydepError, Result};

/// Answers whether a top-level module resolves in the target environment.
pub trait AvailabilityOracle {
    /// Returns `true` when `module` is importable.
    ///
    /// Errors abort the whole run; implementations should only fail when
    /// the check itself cannot be carried out.
    fn is_available(&self, module: &str) -> Result<bool>;
}

/// Exit status the probe uses for "not installed". Distinct from 1 so a
/// crashed probe (uncaught resolver exception) is never mistaken for a
/// missing module.
const MISSING_STATUS: i32 = 3;

/// One-liner handed to the interpreter. The module name travels as an
/// argv element, never interpolated into the code itself.
const FIND_SPEC_PROBE: &str = "import importlib.util\nimport sys\nsys.exit(0 if importlib.util.find_spec(sys.argv[1]) is not None else 3)";

/// Oracle that asks a live Python interpreter via `importlib.util.find_spec`.
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    interpreter: String,
}

impl PythonRuntime {
    /// Create an oracle backed by the given interpreter command.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl AvailabilityOracle for PythonRuntime {
    fn is_available(&self, module: &str) -> Result<bool> {
        let output = Command::new(&self.interpreter)
            .arg("-c")
            .arg(FIND_SPEC_PROBE)
            .arg(module)
            .output()
            .map_err(|source| PydepError::InterpreterLaunchFailed {
                interpreter: self.interpreter.clone(),
                source,
            })?;

        match output.status.code() {
            Some(0) => Ok(true),
            Some(MISSING_STATUS) => Ok(false),
            code => Err(PydepError::ResolutionFailed {
                module: module.to_string(),
                message: probe_failure_message(code, &output.stderr),
            }),
        }
    }
}

fn probe_failure_message(code: Option<i32>, stderr: &[u8]) -> String {
    let detail = String::from_utf8_lossy(stderr);
    let detail = detail.trim();
    match code {
        Some(code) if detail.is_empty() => format!("probe exited with code {}", code),
        Some(code) => format!("probe exited with code {}: {}", code, last_line(detail)),
        None => "probe terminated by signal".to_string(),
    }
}

/// A Python traceback ends with the exception itself; that line is the
/// useful part.
fn last_line(text: &str) -> &str {
    text.lines().last().unwrap_or(text)
}

/// Oracle that answers from a fixed set of module names.
#[derive(Debug, Clone, Default)]
pub struct StaticAvailability {
    available: HashSet<String>,
}

impl StaticAvailability {
    /// Create an oracle that reports exactly `available` as installed.
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
        }
    }
}

impl AvailabilityOracle for StaticAvailability {
    fn is_available(&self, module: &str) -> Result<bool> {
        Ok(self.available.contains(module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_oracle_answers_from_fixed_set() {
        let oracle = StaticAvailability::new(["os", "sys"]);
        assert!(oracle.is_available("os").unwrap());
        assert!(oracle.is_available("sys").unwrap());
        assert!(!oracle.is_available("numpy").unwrap());
    }

    #[test]
    fn empty_static_oracle_reports_everything_missing() {
        let oracle = StaticAvailability::default();
        assert!(!oracle.is_available("os").unwrap());
    }

    #[test]
    fn probe_failure_message_includes_exit_code() {
        let message = probe_failure_message(Some(1), b"");
        assert!(message.contains("code 1"));
    }

    #[test]
    fn probe_failure_message_keeps_the_exception_line() {
        let stderr = b"Traceback (most recent call last):\n  File \"<string>\", line 1\nValueError: empty module name\n";
        let message = probe_failure_message(Some(1), stderr);
        assert!(message.contains("ValueError: empty module name"));
        assert!(!message.contains("Traceback"));
    }

    #[test]
    fn unlaunchable_interpreter_is_a_launch_error() {
        let oracle = PythonRuntime::new("this-interpreter-does-not-exist-12345");
        let err = oracle.is_available("os").unwrap_err();
        assert!(matches!(err, PydepError::InterpreterLaunchFailed { .. }));
    }

    #[cfg(unix)]
    mod fake_interpreter {
        use super::*;
        use std::fs;
        use std::path::{Path, PathBuf};
        use tempfile::TempDir;

        fn create_fake_interpreter(dir: &Path, body: &str) -> PathBuf {
            use std::os::unix::fs::PermissionsExt;
            let path = dir.join("python-fake");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn exit_zero_means_installed() {
            let temp = TempDir::new().unwrap();
            let interpreter = create_fake_interpreter(temp.path(), "exit 0");
            let oracle = PythonRuntime::new(interpreter.display().to_string());
            assert!(oracle.is_available("anything").unwrap());
        }

        #[test]
        fn missing_status_means_not_installed() {
            let temp = TempDir::new().unwrap();
            let interpreter = create_fake_interpreter(temp.path(), "exit 3");
            let oracle = PythonRuntime::new(interpreter.display().to_string());
            assert!(!oracle.is_available("anything").unwrap());
        }

        #[test]
        fn probe_crash_is_a_resolution_error() {
            let temp = TempDir::new().unwrap();
            let interpreter = create_fake_interpreter(
                temp.path(),
                "echo 'ValueError: bad name' >&2\nexit 1",
            );
            let oracle = PythonRuntime::new(interpreter.display().to_string());
            let err = oracle.is_available("numpy").unwrap_err();
            match err {
                PydepError::ResolutionFailed { module, message } => {
                    assert_eq!(module, "numpy");
                    assert!(message.contains("code 1"));
                    assert!(message.contains("ValueError: bad name"));
                }
                other => panic!("expected ResolutionFailed, got {:?}", other),
            }
        }
    }
}
