use crate::license_audit::domain::{FilterSpec, LicenseSource, PolicySpec, SortKey};
use crate::license_audit::policies::SpdxMode;
use crate::license_audit::services::CodePage;

/// AuditRequest - Internal request DTO for the license audit use case
///
/// Every value here has already been validated; building a request cannot
/// fail. Defaults match a bare invocation of the CLI.
#[derive(Debug, Clone, Default)]
pub struct AuditRequest {
    /// Which metadata fields licenses are taken from
    pub source: LicenseSource,
    /// Whether SPDX `OR` expressions are split into their identifiers
    pub spdx: SpdxMode,
    /// Requested ordering of the report
    pub order: SortKey,
    /// Collapse packages into license/count groups
    pub summary: bool,
    /// Packages to keep (empty keeps everything)
    pub include: FilterSpec,
    /// Packages to drop
    pub exclude: FilterSpec,
    /// Packages dropped unless system packages are requested
    pub default_exclusions: FilterSpec,
    /// Load license and notice file contents
    pub include_files: bool,
    /// Strip characters outside this code page from every text field
    pub code_page: Option<CodePage>,
    /// fail-on / allow-only rules
    pub policy: PolicySpec,
}

impl AuditRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: LicenseSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_spdx(mut self, spdx: SpdxMode) -> Self {
        self.spdx = spdx;
        self
    }

    pub fn with_order(mut self, order: SortKey) -> Self {
        self.order = order;
        self
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_include(mut self, include: FilterSpec) -> Self {
        self.include = include;
        self
    }

    pub fn with_exclude(mut self, exclude: FilterSpec) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_default_exclusions(mut self, defaults: FilterSpec) -> Self {
        self.default_exclusions = defaults;
        self
    }

    pub fn with_include_files(mut self, include_files: bool) -> Self {
        self.include_files = include_files;
        self
    }

    pub fn with_code_page(mut self, code_page: Option<CodePage>) -> Self {
        self.code_page = code_page;
        self
    }

    pub fn with_policy(mut self, policy: PolicySpec) -> Self {
        self.policy = policy;
        self
    }
}
