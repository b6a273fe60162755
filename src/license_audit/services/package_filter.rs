use crate::license_audit::domain::{versions_equal, FilterSpec, PackageRecord, PackageSpec};

/// PackageFilter - Selects packages by include and exclude specs
///
/// Names are compared in normalized form, so case and `-`/`_`/`.` do not matter.
/// A spec with a version only selects that exact version.
///
/// Include narrowing is applied first, then exclusion. Default exclusions
/// (system packages) are merged in front of the user's exclude list.
/// Specs that match nothing are simply no-ops.
#[derive(Debug)]
pub struct PackageFilter {
    include: Vec<SpecMatcher>,
    exclude: Vec<SpecMatcher>,
}

impl PackageFilter {
    /// Creates a filter from include and exclude specs
    ///
    /// An empty include spec keeps every package.
    pub fn new(include: &FilterSpec, exclude: &FilterSpec) -> Self {
        Self {
            include: compile(include),
            exclude: compile(exclude),
        }
    }

    /// Adds default exclusions ahead of the user-provided ones
    pub fn with_default_exclusions(mut self, defaults: &FilterSpec) -> Self {
        let mut exclude = compile(defaults);
        exclude.append(&mut self.exclude);
        self.exclude = exclude;
        self
    }

    /// Keeps only the packages selected by this filter, preserving order
    pub fn filter_packages(&self, packages: Vec<PackageRecord>) -> Vec<PackageRecord> {
        packages
            .into_iter()
            .filter(|pkg| self.is_selected(pkg))
            .collect()
    }

    /// Checks whether one package survives include narrowing and exclusion
    pub fn is_selected(&self, package: &PackageRecord) -> bool {
        let name = package.package_name().normalized();
        let version = package.version();

        if !self.include.is_empty() && !self.include.iter().any(|m| m.matches(&name, version)) {
            return false;
        }

        !self.exclude.iter().any(|m| m.matches(&name, version))
    }
}

fn compile(spec: &FilterSpec) -> Vec<SpecMatcher> {
    spec.specs().iter().map(SpecMatcher::new).collect()
}

/// One compiled package spec
#[derive(Debug)]
struct SpecMatcher {
    name: String,
    version: Option<String>,
}

impl SpecMatcher {
    fn new(spec: &PackageSpec) -> Self {
        Self {
            name: spec.name().to_string(),
            version: spec.version().map(str::to_string),
        }
    }

    fn matches(&self, normalized_name: &str, version: &str) -> bool {
        self.name == normalized_name
            && self
                .version
                .as_deref()
                .map_or(true, |expected| versions_equal(expected, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(name: &str, version: &str) -> PackageRecord {
        PackageRecord::new(name.to_string(), version.to_string()).unwrap()
    }

    fn spec(tokens: &[&str]) -> FilterSpec {
        FilterSpec::parse(tokens.iter().copied()).unwrap()
    }

    fn identifiers(packages: &[PackageRecord]) -> Vec<String> {
        packages.iter().map(PackageRecord::identifier).collect()
    }

    #[test]
    fn test_no_specs_keeps_everything() {
        let filter = PackageFilter::new(&FilterSpec::default(), &FilterSpec::default());
        let result = filter.filter_packages(vec![pkg("a", "1"), pkg("b", "2")]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_exclude_bare_and_versioned() {
        let filter = PackageFilter::new(&FilterSpec::default(), &spec(&["django", "pytz:2017.3"]));
        let result = filter.filter_packages(vec![
            pkg("django", "2.0.2"),
            pkg("pytz", "2017.3"),
            pkg("pytz", "2018.1"),
        ]);
        assert_eq!(identifiers(&result), vec!["pytz:2018.1"]);
    }

    #[test]
    fn test_exclude_is_case_insensitive() {
        let filter = PackageFilter::new(&FilterSpec::default(), &spec(&["DJANGO"]));
        let result = filter.filter_packages(vec![pkg("Django", "2.0.2")]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_exclude_normalizes_separators() {
        let filter = PackageFilter::new(&FilterSpec::default(), &spec(&["zope_interface"]));
        let result = filter.filter_packages(vec![pkg("zope.interface", "6.0")]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_include_narrows() {
        let filter = PackageFilter::new(&spec(&["requests", "idna"]), &FilterSpec::default());
        let result = filter.filter_packages(vec![
            pkg("requests", "2.31.0"),
            pkg("urllib3", "2.0.0"),
            pkg("idna", "3.4"),
        ]);
        assert_eq!(identifiers(&result), vec!["requests:2.31.0", "idna:3.4"]);
    }

    #[test]
    fn test_include_with_version_requires_exact_version() {
        let filter = PackageFilter::new(&spec(&["pytz:2017.3"]), &FilterSpec::default());
        let result = filter.filter_packages(vec![pkg("pytz", "2017.3"), pkg("pytz", "2018.1")]);
        assert_eq!(identifiers(&result), vec!["pytz:2017.3"]);
    }

    #[test]
    fn test_include_then_exclude() {
        let filter = PackageFilter::new(&spec(&["pytz"]), &spec(&["pytz:2018.1"]));
        let result = filter.filter_packages(vec![
            pkg("pytz", "2017.3"),
            pkg("pytz", "2018.1"),
            pkg("django", "2.0.2"),
        ]);
        assert_eq!(identifiers(&result), vec!["pytz:2017.3"]);
    }

    #[test]
    fn test_unknown_specs_are_no_ops() {
        let filter = PackageFilter::new(&FilterSpec::default(), &spec(&["does-not-exist"]));
        let result = filter.filter_packages(vec![pkg("requests", "2.31.0")]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_default_exclusions() {
        let filter = PackageFilter::new(&FilterSpec::default(), &spec(&["django"]))
            .with_default_exclusions(&spec(&["pip", "setuptools"]));
        let result = filter.filter_packages(vec![
            pkg("pip", "24.0"),
            pkg("setuptools", "69.0"),
            pkg("django", "2.0.2"),
            pkg("requests", "2.31.0"),
        ]);
        assert_eq!(identifiers(&result), vec!["requests:2.31.0"]);
    }

    #[test]
    fn test_default_exclusions_apply_to_included_packages() {
        let filter = PackageFilter::new(&spec(&["pip", "requests"]), &FilterSpec::default())
            .with_default_exclusions(&spec(&["pip"]));
        let result = filter.filter_packages(vec![pkg("pip", "24.0"), pkg("requests", "2.31.0")]);
        assert_eq!(identifiers(&result), vec!["requests:2.31.0"]);
    }

    #[test]
    fn test_asterisk_is_not_a_wildcard() {
        let filter = PackageFilter::new(&spec(&["dj*"]), &FilterSpec::default());
        let result = filter.filter_packages(vec![
            pkg("django", "2.0.2"),
            pkg("djangorestframework", "3.0"),
            pkg("pytz", "2017.3"),
        ]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_include_does_not_match_name_prefix() {
        let filter = PackageFilter::new(&spec(&["django"]), &FilterSpec::default());
        let result = filter.filter_packages(vec![
            pkg("django", "2.0.2"),
            pkg("djangorestframework", "3.0"),
        ]);
        assert_eq!(identifiers(&result), vec!["django:2.0.2"]);
    }

    #[test]
    fn test_long_exclude_list_is_accepted() {
        let tokens: Vec<String> = (0..2000).map(|i| format!("pkg{}", i)).collect();
        let exclude = FilterSpec::parse(&tokens).unwrap();
        let filter = PackageFilter::new(&FilterSpec::default(), &exclude);
        let result = filter.filter_packages(vec![pkg("pkg1999", "1"), pkg("requests", "1")]);
        assert_eq!(identifiers(&result), vec!["requests:1"]);
    }
}
