use crate::license_audit::domain::{LicenseGroup, ResolvedPackage};
use std::collections::HashMap;

/// SummaryAggregator - Collapses packages into license display groups
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// Counts packages per license display string
    ///
    /// Groups appear in order of first occurrence. A package whose display
    /// string joins several licenses forms its own group.
    pub fn summarize(packages: &[ResolvedPackage]) -> Vec<LicenseGroup> {
        let mut groups: Vec<LicenseGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for package in packages {
            let display = package.license_display();
            match index.get(display) {
                Some(&position) => groups[position].count += 1,
                None => {
                    index.insert(display, groups.len());
                    groups.push(LicenseGroup::new(display, 1));
                }
            }
        }

        groups
    }
}
