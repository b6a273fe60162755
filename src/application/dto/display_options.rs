use crate::license_audit::domain::LicenseSource;

/// DisplayOptions - Column selection for the rendered report
///
/// These options never influence which packages are reported or how the
/// policy is evaluated; they only shape the report table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub source: LicenseSource,
    pub summary: bool,
    pub with_authors: bool,
    pub with_maintainers: bool,
    pub with_urls: bool,
    pub with_description: bool,
    pub no_version: bool,
    pub with_license_file: bool,
    pub no_license_path: bool,
    pub with_notice_file: bool,
}

impl DisplayOptions {
    /// Whether license or notice file contents must be loaded
    pub fn include_files(&self) -> bool {
        self.with_license_file || self.with_notice_file
    }
}
