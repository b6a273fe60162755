pub mod license_extractor;
pub mod license_normalizer;
pub mod package_filter;
pub mod package_sorter;
pub mod policy_evaluator;
pub mod string_sanitizer;
pub mod summary_aggregator;

pub use license_extractor::LicenseExtractor;
pub use license_normalizer::{LicenseNormalizer, DISPLAY_SEPARATOR};
pub use package_filter::PackageFilter;
pub use package_sorter::{PackageSorter, Sortable, SortValue};
pub use policy_evaluator::PolicyEvaluator;
pub use string_sanitizer::{CodePage, StringSanitizer};
pub use summary_aggregator::SummaryAggregator;
