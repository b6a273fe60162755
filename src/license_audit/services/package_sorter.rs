use crate::license_audit::domain::{LicenseGroup, ResolvedPackage, SortKey, UNKNOWN_LICENSE};
use std::cmp::Ordering;

/// Primary sort value of a row
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Number(usize),
    Text(String),
}

/// Rows the sorter can order
pub trait Sortable {
    /// Value compared first for `key`
    fn sort_value(&self, key: SortKey) -> SortValue;

    /// Values compared when primary values tie, making the order total
    fn tie_breaker(&self) -> Vec<String>;
}

impl Sortable for ResolvedPackage {
    fn sort_value(&self, key: SortKey) -> SortValue {
        let record = self.record();
        let text = match key {
            SortKey::License => self.license_display(),
            SortKey::Author => record.author().unwrap_or(UNKNOWN_LICENSE),
            SortKey::Maintainer => record.maintainer().unwrap_or(UNKNOWN_LICENSE),
            SortKey::Url => record.url().unwrap_or(UNKNOWN_LICENSE),
            SortKey::Name | SortKey::Count => record.name(),
        };
        SortValue::Text(text.to_lowercase())
    }

    fn tie_breaker(&self) -> Vec<String> {
        vec![
            self.name().to_lowercase(),
            self.version().to_lowercase(),
            self.name().to_string(),
            self.version().to_string(),
        ]
    }
}

impl Sortable for LicenseGroup {
    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Count => SortValue::Number(self.count),
            _ => SortValue::Text(self.license.to_lowercase()),
        }
    }

    fn tie_breaker(&self) -> Vec<String> {
        vec![self.license.to_lowercase(), self.license.clone()]
    }
}

/// PackageSorter - Orders report rows by a sort key
///
/// Text comparison is case-insensitive ascending and counts ascend
/// numerically. Ties fall back to the package name, so identical input
/// always produces identical output regardless of input order.
pub struct PackageSorter;

impl PackageSorter {
    /// Resolves the key actually used for a view
    ///
    /// The summary view only honors `license` and `count`; any other key
    /// falls back to `license`.
    pub fn effective_key(requested: SortKey, summary: bool) -> SortKey {
        if !summary {
            return requested;
        }
        match requested {
            SortKey::Count => SortKey::Count,
            _ => SortKey::License,
        }
    }

    /// Sorts `rows` by `key`
    pub fn sort<T: Sortable>(rows: Vec<T>, key: SortKey) -> Vec<T> {
        let mut keyed: Vec<(SortValue, Vec<String>, T)> = rows
            .into_iter()
            .map(|row| (row.sort_value(key), row.tie_breaker(), row))
            .collect();

        keyed.sort_by(|a, b| match a.0.cmp(&b.0) {
            Ordering::Equal => a.1.cmp(&b.1),
            other => other,
        });

        keyed.into_iter().map(|(_, _, row)| row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_audit::domain::{LicenseSource, PackageRecord};
    use crate::license_audit::services::{LicenseExtractor, LicenseNormalizer};

    fn resolved(name: &str, version: &str, license: &str, author: Option<&str>) -> ResolvedPackage {
        let mut record = PackageRecord::new(name.to_string(), version.to_string())
            .unwrap()
            .with_license(license);
        if let Some(author) = author {
            record = record.with_author(author);
        }
        let extractor = LicenseExtractor::default();
        let licenses = extractor.extract(&record, LicenseSource::Meta);
        let normalized = LicenseNormalizer::normalize(&licenses);
        let meta = extractor.from_metadata(record.license(), LicenseSource::Meta);
        let classifier = extractor.from_classifiers(record.classifiers(), LicenseSource::Classifier);
        ResolvedPackage::new(record, licenses, normalized, meta, classifier)
    }

    fn names(rows: &[ResolvedPackage]) -> Vec<String> {
        rows.iter().map(|r| r.record().identifier()).collect()
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let rows = vec![
            resolved("zope", "1", "ZPL", None),
            resolved("Babel", "1", "BSD", None),
            resolved("attrs", "1", "MIT", None),
        ];
        let sorted = PackageSorter::sort(rows, SortKey::Name);
        assert_eq!(names(&sorted), vec!["attrs:1", "Babel:1", "zope:1"]);
    }

    #[test]
    fn test_sort_by_license_ties_broken_by_name() {
        let rows = vec![
            resolved("c", "1", "MIT", None),
            resolved("a", "1", "mit", None),
            resolved("b", "1", "Apache", None),
        ];
        let sorted = PackageSorter::sort(rows, SortKey::License);
        assert_eq!(names(&sorted), vec!["b:1", "a:1", "c:1"]);
    }

    #[test]
    fn test_sort_by_author_missing_sorts_as_unknown() {
        let rows = vec![
            resolved("a", "1", "MIT", None),
            resolved("b", "1", "MIT", Some("Zed")),
            resolved("c", "1", "MIT", Some("alice")),
        ];
        let sorted = PackageSorter::sort(rows, SortKey::Author);
        assert_eq!(names(&sorted), vec!["c:1", "a:1", "b:1"]);
    }

    #[test]
    fn test_sort_same_name_orders_by_version() {
        let rows = vec![resolved("pytz", "2018.1", "MIT", None), resolved("pytz", "2017.3", "MIT", None)];
        let sorted = PackageSorter::sort(rows, SortKey::Name);
        assert_eq!(names(&sorted), vec!["pytz:2017.3", "pytz:2018.1"]);
    }

    #[test]
    fn test_sort_is_idempotent_and_permutation_stable() {
        let build = || {
            vec![
                resolved("b", "1", "MIT", None),
                resolved("a", "1", "MIT", None),
                resolved("c", "2", "BSD", None),
                resolved("c", "1", "BSD", None),
            ]
        };
        let once = PackageSorter::sort(build(), SortKey::License);
        let twice = PackageSorter::sort(once.clone(), SortKey::License);
        assert_eq!(names(&once), names(&twice));

        let mut reversed = build();
        reversed.reverse();
        let from_reversed = PackageSorter::sort(reversed, SortKey::License);
        assert_eq!(names(&once), names(&from_reversed));
    }

    #[test]
    fn test_sort_groups_by_count_and_license() {
        let groups = vec![
            LicenseGroup::new("MIT", 2),
            LicenseGroup::new("BSD", 1),
            LicenseGroup::new("Apache", 2),
        ];
        let by_count = PackageSorter::sort(groups.clone(), SortKey::Count);
        assert_eq!(
            by_count,
            vec![
                LicenseGroup::new("BSD", 1),
                LicenseGroup::new("Apache", 2),
                LicenseGroup::new("MIT", 2),
            ]
        );

        let by_license = PackageSorter::sort(groups, SortKey::License);
        assert_eq!(by_license[0].license, "Apache");
        assert_eq!(by_license[2].license, "MIT");
    }

    #[test]
    fn test_effective_key_in_summary_view() {
        assert_eq!(PackageSorter::effective_key(SortKey::Count, true), SortKey::Count);
        assert_eq!(PackageSorter::effective_key(SortKey::License, true), SortKey::License);
        assert_eq!(PackageSorter::effective_key(SortKey::Author, true), SortKey::License);
        assert_eq!(PackageSorter::effective_key(SortKey::Name, true), SortKey::License);
        assert_eq!(PackageSorter::effective_key(SortKey::Author, false), SortKey::Author);
    }
}
