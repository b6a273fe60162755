pub mod filter_spec;
pub mod license_set;
pub mod package;
pub mod policy;
pub mod resolved_package;
pub mod sort_key;

pub use filter_spec::{FilterSpec, PackageSpec};
pub use license_set::{LicenseSet, LicenseSource, UNKNOWN_LICENSE};
pub use package::{
    normalize_package_name, versions_equal, AttachedFile, PackageName, PackageRecord, Version,
};
pub use policy::{
    parse_license_list, Aggregation, MatchMode, PolicyFailure, PolicySpec, Verdict, Violation,
};
pub use resolved_package::{LicenseGroup, NormalizedLicenses, ResolvedPackage};
pub use sort_key::SortKey;
