use crate::application::dto::{AuditRequest, AuditResponse};
use crate::license_audit::domain::{
    LicenseGroup, LicenseSource, PackageRecord, PolicySpec, ResolvedPackage, SortKey, Verdict,
};
use crate::license_audit::services::{
    CodePage, LicenseExtractor, LicenseNormalizer, PackageFilter, PackageSorter, PolicyEvaluator,
    StringSanitizer, SummaryAggregator,
};
use crate::ports::outbound::{InstalledPackageSource, ProgressReporter};
use crate::shared::Result;

/// AuditLicensesUseCase - Core use case for the license audit
///
/// This use case orchestrates the audit pipeline using generic dependency
/// injection for its infrastructure dependencies. Everything after the
/// initial package read is pure computation over the records.
///
/// # Type Parameters
/// * `S` - InstalledPackageSource implementation
/// * `P` - ProgressReporter implementation
pub struct AuditLicensesUseCase<S, P> {
    package_source: S,
    progress_reporter: P,
}

impl<S, P> AuditLicensesUseCase<S, P>
where
    S: InstalledPackageSource,
    P: ProgressReporter,
{
    /// Creates a new AuditLicensesUseCase with injected dependencies
    pub fn new(package_source: S, progress_reporter: P) -> Self {
        Self {
            package_source,
            progress_reporter,
        }
    }

    /// Executes the license audit
    ///
    /// # Arguments
    /// * `request` - Validated audit options
    ///
    /// # Returns
    /// AuditResponse with the ordered packages, optional summary groups,
    /// the policy verdict and any non-fatal warnings
    ///
    /// # Errors
    /// Only a failure to enumerate installed packages is fatal. A failing
    /// policy is reported through the verdict, not as an error.
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Enumerate installed distributions
        let records = self.read_packages(&request)?;

        // Step 2: Strip characters the target code page cannot encode
        let records = Self::sanitize_strings(records, request.code_page);

        // Step 3: Include narrowing, then exclusion
        let records = self.apply_filters(records, &request);

        // Step 4: Extract and normalize licenses
        let (resolved, warnings) = self.resolve_licenses(records, &request);

        // Step 5: Order packages
        let sort_key = PackageSorter::effective_key(request.order, request.summary);
        let packages = PackageSorter::sort(resolved, sort_key);

        // Step 6: Evaluate fail-on / allow-only rules
        let verdict = self.evaluate_policy(&packages, &request.policy);

        // Step 7: Collapse into license groups if requested
        let summary = request
            .summary
            .then(|| Self::summarize(&packages, request.order));

        Ok(AuditResponse::new(packages, summary, verdict, warnings))
    }

    /// Reads installed packages, reporting progress
    fn read_packages(&self, request: &AuditRequest) -> Result<Vec<PackageRecord>> {
        self.progress_reporter
            .report("📖 Reading installed package metadata...");

        let records = self.package_source.read_packages(request.include_files)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", records.len()));

        Ok(records)
    }

    /// Applies the filter-strings option to every free-text field
    fn sanitize_strings(
        records: Vec<PackageRecord>,
        code_page: Option<CodePage>,
    ) -> Vec<PackageRecord> {
        let Some(code_page) = code_page else {
            return records;
        };

        let sanitizer = StringSanitizer::new(code_page);
        records
            .into_iter()
            .map(|record| record.map_text(|value| sanitizer.sanitize(value)))
            .collect()
    }

    /// Applies include/exclude specs and the default system exclusions
    fn apply_filters(
        &self,
        records: Vec<PackageRecord>,
        request: &AuditRequest,
    ) -> Vec<PackageRecord> {
        let filter = PackageFilter::new(&request.include, &request.exclude)
            .with_default_exclusions(&request.default_exclusions);

        let original_count = records.len();
        let filtered = filter.filter_packages(records);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package(s) based on filters",
                excluded_count
            ));
        }

        filtered
    }

    /// Resolves the license set of every record
    ///
    /// SPDX conjunctions that had to be kept verbatim are returned as
    /// warnings and reported once resolution is complete.
    fn resolve_licenses(
        &self,
        records: Vec<PackageRecord>,
        request: &AuditRequest,
    ) -> (Vec<ResolvedPackage>, Vec<String>) {
        let extractor = LicenseExtractor::new(request.spdx);
        let total = records.len();
        let mut resolved = Vec::with_capacity(total);
        let mut warnings = Vec::new();

        for (idx, record) in records.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(record.name()));

            for expression in extractor.unsupported_expressions(&record, request.source) {
                warnings.push(format!(
                    "⚠️  Warning: License expression '{}' of {} combines licenses with AND/WITH; it is kept as a single license name.",
                    expression,
                    record.identifier()
                ));
            }

            let licenses = extractor.extract(&record, request.source);
            let normalized = LicenseNormalizer::normalize(&licenses);
            let metadata_licenses = extractor.from_metadata(record.license(), LicenseSource::Meta);
            let classifier_licenses =
                extractor.from_classifiers(record.classifiers(), LicenseSource::Classifier);

            resolved.push(ResolvedPackage::new(
                record,
                licenses,
                normalized,
                metadata_licenses,
                classifier_licenses,
            ));
        }

        if total > 0 {
            self.progress_reporter.report_completion(&format!(
                "✅ Resolved licenses for {} package(s)",
                total
            ));
        }

        for warning in &warnings {
            self.progress_reporter.report_error(warning);
        }

        (resolved, warnings)
    }

    /// Evaluates the license policy, if any rule is configured
    fn evaluate_policy(&self, packages: &[ResolvedPackage], policy: &PolicySpec) -> Verdict {
        if policy.is_empty() {
            return Verdict::pass();
        }

        self.progress_reporter.report("🔒 Checking license policy...");
        PolicyEvaluator::evaluate(packages, policy)
    }

    /// Groups packages by license and orders the groups
    fn summarize(packages: &[ResolvedPackage], order: SortKey) -> Vec<LicenseGroup> {
        let groups = SummaryAggregator::summarize(packages);
        PackageSorter::sort(groups, PackageSorter::effective_key(order, true))
    }
}
