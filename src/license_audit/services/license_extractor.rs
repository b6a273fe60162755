use crate::license_audit::domain::{LicenseSet, LicenseSource, PackageRecord, UNKNOWN_LICENSE};
use crate::license_audit::policies::{split_expression, ExpressionOutcome, SpdxMode};

/// Trove classifier prefix marking a license classifier
const CLASSIFIER_PREFIX: &str = "License ::";

/// Classifier path separator
const CLASSIFIER_SEPARATOR: &str = " :: ";

/// Trailing segment that names a category rather than a license
const OSI_APPROVED: &str = "OSI Approved";

/// Separator for several licenses packed into one metadata field
const METADATA_LIST_SEPARATOR: char = ';';

/// LicenseExtractor - Derives license names from package metadata
///
/// Extraction is a pure function of the record and the selected source.
/// Metadata fields that look like SPDX disjunctions are split only when
/// SPDX support is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LicenseExtractor {
    spdx: SpdxMode,
}

impl LicenseExtractor {
    pub fn new(spdx: SpdxMode) -> Self {
        Self { spdx }
    }

    /// Extracts the license names of `record` according to `source`
    ///
    /// The returned set is never empty; `UNKNOWN` stands in when the selected
    /// source(s) carry no license information.
    pub fn extract(&self, record: &PackageRecord, source: LicenseSource) -> LicenseSet {
        match source {
            LicenseSource::Classifier => self.from_classifiers(record.classifiers(), source),
            LicenseSource::Meta => self.from_metadata(record.license(), source),
            LicenseSource::Mixed => {
                let classifiers = self.from_classifiers(record.classifiers(), source);
                if classifiers.is_unknown() {
                    self.from_metadata(record.license(), source)
                } else {
                    classifiers
                }
            }
            LicenseSource::All => {
                let mut licenses = self.from_classifiers(record.classifiers(), source);
                licenses.merge(&self.from_metadata(record.license(), source));
                licenses
            }
        }
    }

    /// License names taken from `License ::` classifiers, in classifier order
    pub fn from_classifiers(&self, classifiers: &[String], source: LicenseSource) -> LicenseSet {
        let mut licenses = LicenseSet::new(source);
        for classifier in classifiers {
            if !classifier.starts_with(CLASSIFIER_PREFIX) {
                continue;
            }
            if let Some(name) = classifier.rsplit(CLASSIFIER_SEPARATOR).next() {
                if name.trim() != OSI_APPROVED {
                    licenses.insert(name);
                }
            }
        }
        licenses.or_unknown()
    }

    /// License names taken from the metadata license field
    pub fn from_metadata(&self, license: Option<&str>, source: LicenseSource) -> LicenseSet {
        let mut licenses = LicenseSet::new(source);
        for part in metadata_parts(license) {
            for name in self.spdx.resolve(part) {
                licenses.insert(name);
            }
        }
        licenses.or_unknown()
    }

    /// Metadata values that are SPDX conjunctions and were kept verbatim
    ///
    /// Only reported when SPDX support is enabled and `source` actually reads
    /// the metadata field for this record.
    pub fn unsupported_expressions(
        &self,
        record: &PackageRecord,
        source: LicenseSource,
    ) -> Vec<String> {
        if self.spdx == SpdxMode::Disabled {
            return Vec::new();
        }

        let reads_metadata = match source {
            LicenseSource::Meta | LicenseSource::All => true,
            LicenseSource::Classifier => false,
            LicenseSource::Mixed => self
                .from_classifiers(record.classifiers(), source)
                .is_unknown(),
        };
        if !reads_metadata {
            return Vec::new();
        }

        metadata_parts(record.license())
            .into_iter()
            .filter(|part| split_expression(part) == ExpressionOutcome::Unsupported)
            .map(str::to_string)
            .collect()
    }
}

/// Splits the metadata field into its `;`-separated parts
///
/// Multi-line values are license texts pasted into the field and stay whole.
fn metadata_parts(license: Option<&str>) -> Vec<&str> {
    let field = match license.map(str::trim) {
        Some(field) if !field.is_empty() => field,
        _ => return Vec::new(),
    };

    if field.contains('\n') {
        return vec![field];
    }

    field
        .split(METADATA_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// True when a set carries real license information
pub fn has_known_license(licenses: &LicenseSet) -> bool {
    licenses.iter().any(|name| name != UNKNOWN_LICENSE)
}
