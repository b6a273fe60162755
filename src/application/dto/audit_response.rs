use crate::license_audit::domain::{LicenseGroup, ResolvedPackage, Verdict};

/// AuditResponse - Internal response DTO from the license audit use case
///
/// This DTO contains the rich data produced by the use case, which the
/// read-model builder and formatters turn into a report.
#[derive(Debug, Clone)]
pub struct AuditResponse {
    /// Packages that survived filtering, in report order
    pub packages: Vec<ResolvedPackage>,
    /// License groups in report order (only present in summary view)
    pub summary: Option<Vec<LicenseGroup>>,
    /// Policy evaluation result
    pub verdict: Verdict,
    /// Non-fatal diagnostics collected while resolving licenses
    pub warnings: Vec<String>,
}

impl AuditResponse {
    pub fn new(
        packages: Vec<ResolvedPackage>,
        summary: Option<Vec<LicenseGroup>>,
        verdict: Verdict,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            packages,
            summary,
            verdict,
            warnings,
        }
    }
}
