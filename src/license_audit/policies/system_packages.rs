use crate::license_audit::domain::FilterSpec;
use crate::shared::Result;

/// Distributions hidden from reports unless system packages are requested
///
/// The reporting tool's own distribution plus the installer tooling every
/// environment carries.
pub const SYSTEM_PACKAGES: &[&str] = &["py-licenses", "pip", "setuptools", "wheel"];

/// Builds the exclusion spec for a list of system package names
pub fn system_exclusions(packages: &[&str]) -> Result<FilterSpec> {
    FilterSpec::parse(packages.iter().copied())
}
