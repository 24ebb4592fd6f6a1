//! Install-script templates and generation.
//!
//! The generated script is a plain shell file: a `#!/bin/bash` header, a
//! status echo, and one install command per missing module. The install
//! command is configuration data (an [`InstallTemplate`] with a `{module}`
//! placeholder), and every module name is validated before it is embedded
//! in shell text.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PydepError, Result};

/// Default output filename for the generated script.
pub const DEFAULT_SCRIPT_NAME: &str = "install_missing_dependencies.sh";

/// Default install command; `{module}` is replaced per missing module.
pub const DEFAULT_INSTALL_COMMAND: &str = "sudo apt install -y python3-{module}";

const MODULE_PLACEHOLDER: &str = "{module}";

// Python identifiers only; anything else could carry shell
// metacharacters into the generated script.
static MODULE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Check that a module name is safe to embed in shell text.
pub fn validate_module_name(name: &str) -> Result<()> {
    if MODULE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(PydepError::InvalidModuleName {
            name: name.to_string(),
        })
    }
}

/// Install command template with a `{module}` placeholder.
///
/// Note the default maps module names straight to Debian package names
/// (`numpy` becomes `python3-numpy`); PyPI and Debian names frequently
/// differ, so operators can substitute their own template.
#[derive(Debug, Clone)]
pub struct InstallTemplate {
    template: String,
}

impl InstallTemplate {
    /// Create a template. Fails when the `{module}` placeholder is absent.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(MODULE_PLACEHOLDER) {
            return Err(PydepError::InvalidTemplate {
                message: format!("missing '{}' placeholder: {}", MODULE_PLACEHOLDER, template),
            });
        }
        Ok(Self { template })
    }

    /// Render the install line for one module.
    pub fn render(&self, module: &str) -> String {
        self.template.replace(MODULE_PLACEHOLDER, module)
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for InstallTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_INSTALL_COMMAND.to_string(),
        }
    }
}

/// Write the install script for `modules` to `path` and mark it executable.
///
/// Overwrites any previous script; equal input produces byte-identical
/// output. All names are validated before anything is written.
pub fn write_install_script(
    path: &Path,
    modules: &[String],
    template: &InstallTemplate,
) -> Result<()> {
    for module in modules {
        validate_module_name(module)?;
    }

    let mut contents = String::from("#!/bin/bash\n");
    contents.push_str("echo 'Installing missing dependencies...'\n");
    for module in modules {
        contents.push_str(&template.render(module));
        contents.push('\n');
    }

    fs::write(path, contents)?;
    mark_executable(path)?;
    tracing::debug!("wrote install script to {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
