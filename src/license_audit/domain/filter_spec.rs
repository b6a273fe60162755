use super::package::normalize_package_name;
use crate::shared::Result;
use std::fmt;

/// A package selector: a bare name or a `name:version` pair
///
/// The name is stored in normalized form so that `Django`, `django` and
/// `DJANGO` select the same distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    original: String,
    name: String,
    version: Option<String>,
}

impl PackageSpec {
    /// Parses a `name` or `name:version` token
    ///
    /// # Errors
    /// Empty token, or an empty name or version part
    pub fn parse(token: &str) -> Result<Self> {
        let original = token.trim();
        if original.is_empty() {
            anyhow::bail!("Package spec cannot be empty");
        }

        let (name, version) = match original.split_once(':') {
            Some((name, version)) => (name.trim(), Some(version.trim())),
            None => (original, None),
        };

        if name.is_empty() {
            anyhow::bail!("Package spec '{}' has an empty name", original);
        }
        if version.is_some_and(str::is_empty) {
            anyhow::bail!("Package spec '{}' has an empty version", original);
        }

        Ok(Self {
            original: original.to_string(),
            name: normalize_package_name(name),
            version: version.map(str::to_string),
        })
    }

    /// Normalized name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// A list of package specs used for inclusion or exclusion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    specs: Vec<PackageSpec>,
}

impl FilterSpec {
    /// Parses every token into a [`PackageSpec`]
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specs = tokens
            .into_iter()
            .map(|token| PackageSpec::parse(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { specs })
    }

    pub fn specs(&self) -> &[PackageSpec] {
        &self.specs
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Appends the specs of `other` after this list's own
    pub fn merged_with(mut self, other: &FilterSpec) -> Self {
        self.specs.extend(other.specs.iter().cloned());
        self
    }
}
