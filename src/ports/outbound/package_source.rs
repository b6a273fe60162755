use crate::license_audit::domain::PackageRecord;
use crate::shared::Result;

/// InstalledPackageSource port for enumerating installed distributions
///
/// This port abstracts how the package environment is inspected
/// (site-packages scan, interpreter query, test fixtures).
pub trait InstalledPackageSource {
    /// Reads every installed distribution
    ///
    /// # Arguments
    /// * `include_files` - Whether license and notice file contents should be loaded
    ///
    /// # Returns
    /// One record per distinct `name:version`, in discovery order
    ///
    /// # Errors
    /// Returns an error if the environment cannot be enumerated at all.
    /// Individual unreadable distributions are not errors.
    fn read_packages(&self, include_files: bool) -> Result<Vec<PackageRecord>>;
}
