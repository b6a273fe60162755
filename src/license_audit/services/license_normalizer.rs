use crate::license_audit::domain::{LicenseSet, NormalizedLicenses, UNKNOWN_LICENSE};

/// Separator between license names in display strings
pub const DISPLAY_SEPARATOR: &str = "; ";

/// LicenseNormalizer - Produces display and comparison forms of a license set
pub struct LicenseNormalizer;

impl LicenseNormalizer {
    /// Joins names in set order for display and lower-cases them for matching
    pub fn normalize(licenses: &LicenseSet) -> NormalizedLicenses {
        if licenses.is_empty() {
            return NormalizedLicenses::new(
                UNKNOWN_LICENSE.to_string(),
                [UNKNOWN_LICENSE.to_lowercase()].into_iter().collect(),
            );
        }

        let display = licenses.names().join(DISPLAY_SEPARATOR);
        let comparison_set = licenses.iter().map(str::to_lowercase).collect();
        NormalizedLicenses::new(display, comparison_set)
    }

    /// Splits a display string back into license names
    pub fn split_display(display: &str) -> Vec<String> {
        display
            .split(DISPLAY_SEPARATOR)
            .map(str::to_string)
            .collect()
    }
}
