use crate::shared::Result;
use std::path::PathBuf;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a distribution name with validation
///
/// The original spelling is preserved for display; comparisons go through
/// [`PackageName::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        let name = name.trim().to_string();
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, and dots are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the comparison form of this name
    pub fn normalized(&self) -> String {
        normalize_package_name(&self.0)
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercases a distribution name and collapses runs of `-`, `_` and `.` into `-`
pub fn normalize_package_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut previous_separator = false;
    for c in name.trim().chars() {
        if c == '-' || c == '_' || c == '.' {
            if !previous_separator {
                normalized.push('-');
            }
            previous_separator = true;
        } else {
            normalized.extend(c.to_lowercase());
            previous_separator = false;
        }
    }
    normalized
}

/// NewType wrapper for a distribution version
///
/// Versions are opaque strings; the only operation is equality, which
/// ignores case, a leading `v`, zero padding and trailing `.0` release segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        let version = version.trim().to_string();
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether `other` denotes the same version
    pub fn matches(&self, other: &str) -> bool {
        versions_equal(&self.0, other)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Splits a version into its numeric release segments and the remaining suffix
fn version_key(version: &str) -> (Vec<u64>, String) {
    let lowered = version.trim().to_lowercase();
    let lowered = lowered.strip_prefix('v').unwrap_or(&lowered);

    let release_end = lowered
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(lowered.len());
    let (release, suffix) = lowered.split_at(release_end);

    let mut segments: Vec<u64> = release
        .split('.')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    while segments.len() > 1 && segments.last() == Some(&0) {
        segments.pop();
    }

    (segments, suffix.trim_start_matches(['.', '-', '_']).to_string())
}

/// Compares two version strings for equality
pub fn versions_equal(a: &str, b: &str) -> bool {
    version_key(a) == version_key(b)
}

/// A license or notice file shipped inside a distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub path: PathBuf,
    pub text: Option<String>,
}

impl AttachedFile {
    pub fn new(path: PathBuf, text: Option<String>) -> Self {
        Self { path, text }
    }
}

/// One installed distribution as reported by the package-discovery adapter
///
/// `name` and `version` together identify a record within one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    name: PackageName,
    version: Version,
    author: Option<String>,
    maintainer: Option<String>,
    url: Option<String>,
    description: Option<String>,
    classifiers: Vec<String>,
    license: Option<String>,
    license_files: Vec<AttachedFile>,
    notice_files: Vec<AttachedFile>,
}

impl PackageRecord {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
            author: None,
            maintainer: None,
            url: None,
            description: None,
            classifiers: Vec::new(),
            license: None,
            license_files: Vec::new(),
            notice_files: Vec::new(),
        })
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_empty(author.into());
        self
    }

    pub fn with_maintainer(mut self, maintainer: impl Into<String>) -> Self {
        self.maintainer = non_empty(maintainer.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = non_empty(license.into());
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifiers.push(classifier.into());
        self
    }

    pub fn with_classifiers<I, S>(mut self, classifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classifiers
            .extend(classifiers.into_iter().map(Into::into));
        self
    }

    pub fn with_license_file(mut self, file: AttachedFile) -> Self {
        self.license_files.push(file);
        self
    }

    pub fn with_notice_file(mut self, file: AttachedFile) -> Self {
        self.notice_files.push(file);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn package_version(&self) -> &Version {
        &self.version
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn maintainer(&self) -> Option<&str> {
        self.maintainer.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn classifiers(&self) -> &[String] {
        &self.classifiers
    }

    /// Raw license metadata field, `None` when absent or blank
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn license_files(&self) -> &[AttachedFile] {
        &self.license_files
    }

    pub fn notice_files(&self) -> &[AttachedFile] {
        &self.notice_files
    }

    /// `name:version` form used in diagnostics
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }

    /// Applies `f` to every free-text field of the record
    ///
    /// Name and version are left untouched so the record keeps its identity.
    pub fn map_text<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let map_opt = |value: Option<String>| value.and_then(|v| non_empty(f(&v)));
        let map_file = |file: AttachedFile| AttachedFile {
            path: file.path,
            text: file.text.map(|t| f(&t)),
        };

        Self {
            name: self.name,
            version: self.version,
            author: map_opt(self.author),
            maintainer: map_opt(self.maintainer),
            url: map_opt(self.url),
            description: map_opt(self.description),
            classifiers: self.classifiers.iter().map(|c| f(c)).collect(),
            license: map_opt(self.license),
            license_files: self.license_files.into_iter().map(map_file).collect(),
            notice_files: self.notice_files.into_iter().map(map_file).collect(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
