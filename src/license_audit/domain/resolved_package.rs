use super::license_set::LicenseSet;
use super::package::PackageRecord;
use std::collections::BTreeSet;

/// Display and comparison forms of a license set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLicenses {
    display: String,
    comparison_set: BTreeSet<String>,
}

impl NormalizedLicenses {
    pub fn new(display: String, comparison_set: BTreeSet<String>) -> Self {
        Self {
            display,
            comparison_set,
        }
    }

    /// Human-facing form, names joined with `"; "`
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Lower-cased names, used for policy matching only
    pub fn comparison_set(&self) -> &BTreeSet<String> {
        &self.comparison_set
    }
}

/// A package together with the licenses resolved for it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPackage {
    record: PackageRecord,
    licenses: LicenseSet,
    normalized: NormalizedLicenses,
    metadata_licenses: LicenseSet,
    classifier_licenses: LicenseSet,
}

impl ResolvedPackage {
    pub fn new(
        record: PackageRecord,
        licenses: LicenseSet,
        normalized: NormalizedLicenses,
        metadata_licenses: LicenseSet,
        classifier_licenses: LicenseSet,
    ) -> Self {
        Self {
            record,
            licenses,
            normalized,
            metadata_licenses,
            classifier_licenses,
        }
    }

    pub fn record(&self) -> &PackageRecord {
        &self.record
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn version(&self) -> &str {
        self.record.version()
    }

    /// Licenses from the selected source
    pub fn licenses(&self) -> &LicenseSet {
        &self.licenses
    }

    pub fn normalized(&self) -> &NormalizedLicenses {
        &self.normalized
    }

    pub fn license_display(&self) -> &str {
        self.normalized.display()
    }

    /// Licenses read from the metadata field alone
    pub fn metadata_licenses(&self) -> &LicenseSet {
        &self.metadata_licenses
    }

    /// Licenses read from classifiers alone
    pub fn classifier_licenses(&self) -> &LicenseSet {
        &self.classifier_licenses
    }
}

/// Number of packages sharing one license display string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseGroup {
    pub license: String,
    pub count: usize,
}

impl LicenseGroup {
    pub fn new(license: impl Into<String>, count: usize) -> Self {
        Self {
            license: license.into(),
            count,
        }
    }
}
