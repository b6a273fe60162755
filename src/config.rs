//! Configuration file support for py-licenses.
//!
//! Options can be stored in `py-licenses.config.yml`, in an explicit YAML or
//! TOML file, or in the `[tool.py-licenses]` table of `pyproject.toml`. Keys
//! use the same kebab-case names as the command-line options.

use anyhow::Context;
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "py-licenses.config.yml";
const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    pub python: Option<PathBuf>,
    pub site_packages: Option<Vec<PathBuf>>,
    pub from: Option<String>,
    pub order: Option<String>,
    pub format: Option<String>,
    pub summary: Option<bool>,
    pub output_file: Option<PathBuf>,
    pub ignore_packages: Option<Vec<String>>,
    pub packages: Option<Vec<String>>,
    pub with_system: Option<bool>,
    pub with_authors: Option<bool>,
    pub with_maintainers: Option<bool>,
    pub with_urls: Option<bool>,
    pub with_description: Option<bool>,
    pub no_version: Option<bool>,
    pub with_license_file: Option<bool>,
    pub no_license_path: Option<bool>,
    pub with_notice_file: Option<bool>,
    pub filter_strings: Option<bool>,
    pub filter_code_page: Option<String>,
    /// Semicolon-separated license names
    pub fail_on: Option<String>,
    /// Semicolon-separated license names
    pub allow_only: Option<String>,
    pub partial_match: Option<bool>,
    pub collect_all_failures: Option<bool>,
    pub spdx: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, IgnoredAny>,
}

/// `pyproject.toml` layout; only the tool tables are read
#[derive(Debug, Deserialize, Default)]
struct PyProject {
    tool: Option<ToolTables>,
}

#[derive(Debug, Deserialize, Default)]
struct ToolTables {
    #[serde(rename = "py-licenses")]
    py_licenses: Option<ConfigFile>,
    #[serde(rename = "pip-licenses")]
    pip_licenses: Option<ConfigFile>,
}

impl PyProject {
    fn into_section(self) -> Option<ConfigFile> {
        self.tool
            .and_then(|tool| tool.py_licenses.or(tool.pip_licenses))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// Files ending in `.toml` are read as TOML, either as a flat table or from a
/// `[tool.py-licenses]` section. Anything else is read as YAML.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config = if is_toml(path) {
        parse_toml_config(&content, path)?
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    warn_unknown_fields(&config);
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
///
/// `py-licenses.config.yml` wins over the tool table of `pyproject.toml`.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        return load_config_from_path(&config_path).map(Some);
    }

    let pyproject_path = dir.join(PYPROJECT_FILENAME);
    if !pyproject_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&pyproject_path).with_context(|| {
        format!("Failed to read config file: {}", pyproject_path.display())
    })?;
    let section = parse_pyproject(&content, &pyproject_path)?;
    if let Some(ref config) = section {
        warn_unknown_fields(config);
    }
    Ok(section)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn parse_pyproject(content: &str, path: &Path) -> Result<Option<ConfigFile>> {
    let pyproject: PyProject = toml::from_str(content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;
    Ok(pyproject.into_section())
}

fn parse_toml_config(content: &str, path: &Path) -> Result<ConfigFile> {
    if let Some(section) = parse_pyproject(content, path)? {
        return Ok(section);
    }

    toml::from_str(content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
