use crate::shared::error::LicenseAuditError;
use crate::shared::Result;
use std::path::PathBuf;
use std::process::Command;

/// Interpreter used when neither `--python` nor `--site-packages` is given
pub const DEFAULT_PYTHON: &str = "python3";

/// Prints the interpreter's import search path as a JSON array
const SEARCH_PATH_SCRIPT: &str = "import json, sys; print(json.dumps(sys.path))";

/// PythonInterpreter adapter for querying a (possibly foreign) environment
///
/// The interpreter is only asked for its `sys.path`; distributions are then
/// read from disk by the site-packages reader.
pub struct PythonInterpreter {
    executable: PathBuf,
}

impl PythonInterpreter {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    /// Runs the interpreter and returns its import search path
    ///
    /// # Errors
    /// Returns a discovery error if the interpreter cannot be started, exits
    /// unsuccessfully, or prints something other than a list of paths
    pub fn search_path(&self) -> Result<Vec<PathBuf>> {
        let output = Command::new(&self.executable)
            .args(["-c", SEARCH_PATH_SCRIPT])
            .output()
            .map_err(|e| self.discovery_error(format!("failed to run interpreter: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self
                .discovery_error(format!(
                    "interpreter exited with {}: {}",
                    output.status,
                    stderr.trim()
                ))
                .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_search_path(&stdout).map_err(|e| self.discovery_error(e.to_string()).into())
    }

    fn discovery_error(&self, reason: String) -> LicenseAuditError {
        LicenseAuditError::PackageDiscovery {
            reason: format!("{} ({})", reason, self.executable.display()),
            suggestion: "Pass --python with a working interpreter, or --site-packages with the environment's site-packages directory".to_string(),
        }
    }
}

/// Parses the JSON search path printed by the interpreter
///
/// The empty entry (the interpreter's working directory) is dropped.
fn parse_search_path(output: &str) -> Result<Vec<PathBuf>> {
    let entries: Vec<String> = serde_json::from_str(output.trim())
        .map_err(|e| anyhow::anyhow!("unexpected interpreter output: {}", e))?;

    Ok(entries
        .into_iter()
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect())
}
