use std::fmt;
use std::str::FromStr;

/// Sentinel license name used when no license information was found
pub const UNKNOWN_LICENSE: &str = "UNKNOWN";

/// Which metadata source license names are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicenseSource {
    /// The `License` / `License-Expression` metadata field
    Meta,
    /// `License ::` trove classifiers
    Classifier,
    /// Classifiers, falling back to metadata when none are present
    #[default]
    Mixed,
    /// Classifiers followed by metadata
    All,
}

impl LicenseSource {
    pub const VARIANTS: &'static str = "meta (m), classifier (c), mixed (mix), all";
}

impl FromStr for LicenseSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meta" | "m" => Ok(LicenseSource::Meta),
            "classifier" | "c" => Ok(LicenseSource::Classifier),
            "mixed" | "mix" => Ok(LicenseSource::Mixed),
            "all" => Ok(LicenseSource::All),
            _ => Err(format!(
                "Invalid license source: {}. Please specify one of: {}",
                s,
                Self::VARIANTS
            )),
        }
    }
}

impl fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseSource::Meta => write!(f, "meta"),
            LicenseSource::Classifier => write!(f, "classifier"),
            LicenseSource::Mixed => write!(f, "mixed"),
            LicenseSource::All => write!(f, "all"),
        }
    }
}

/// Ordered set of distinct license names
///
/// Insertion order is preserved and a name already present is ignored,
/// so building the same set twice always yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseSet {
    names: Vec<String>,
    source: LicenseSource,
}

impl LicenseSet {
    pub fn new(source: LicenseSource) -> Self {
        Self {
            names: Vec::new(),
            source,
        }
    }

    /// Builds a set containing only the `UNKNOWN` sentinel
    pub fn unknown(source: LicenseSource) -> Self {
        let mut set = Self::new(source);
        set.insert(UNKNOWN_LICENSE);
        set
    }

    /// Inserts a name, returning `false` when it is blank or already present
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Appends every name of `other` that is not yet present
    pub fn merge(&mut self, other: &LicenseSet) {
        for name in &other.names {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn source(&self) -> LicenseSource {
        self.source
    }

    /// True when the set holds nothing but the `UNKNOWN` sentinel
    pub fn is_unknown(&self) -> bool {
        self.names.len() == 1 && self.names[0] == UNKNOWN_LICENSE
    }

    /// Falls back to the `UNKNOWN` sentinel if nothing was inserted
    pub fn or_unknown(mut self) -> Self {
        if self.names.is_empty() {
            self.names.push(UNKNOWN_LICENSE.to_string());
        }
        self
    }
}
