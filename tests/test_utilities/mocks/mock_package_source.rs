use py_licenses::prelude::*;

/// Mock InstalledPackageSource for testing that serves in-memory records
#[derive(Default, Clone)]
pub struct MockPackageSource {
    records: Vec<PackageRecord>,
    should_fail: bool,
}

impl MockPackageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a package whose metadata `License` field is `license`
    pub fn with_package(mut self, name: &str, version: &str, license: &str) -> Self {
        let record = PackageRecord::new(name.to_string(), version.to_string())
            .unwrap()
            .with_license(license);
        self.records.push(record);
        self
    }

    /// Adds a package that only declares licenses through trove classifiers
    pub fn with_classified_package(mut self, name: &str, version: &str, classifiers: &[&str]) -> Self {
        let record = PackageRecord::new(name.to_string(), version.to_string())
            .unwrap()
            .with_classifiers(classifiers.iter().copied());
        self.records.push(record);
        self
    }

    pub fn with_record(mut self, record: PackageRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            records: Vec::new(),
            should_fail: true,
        }
    }
}

impl InstalledPackageSource for MockPackageSource {
    fn read_packages(&self, _include_files: bool) -> Result<Vec<PackageRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock package source failure");
        }
        Ok(self.records.clone())
    }
}
