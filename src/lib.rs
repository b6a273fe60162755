//! py-licenses - License audit tool for Python environments
//!
//! This library reads the core metadata of installed Python distributions,
//! resolves each package's licenses, and reports or enforces them, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_audit`): Pure license resolution, filtering, ordering and policy logic
//! - **Application Layer** (`application`): Use cases, DTOs and the report read model
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use py_licenses::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let package_source =
//!     SitePackagesReader::from_directories(vec![PathBuf::from(".venv/lib/python3.12/site-packages")])?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AuditLicensesUseCase::new(package_source, progress_reporter);
//!
//! // Execute
//! let request = AuditRequest::new().with_order(SortKey::License);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let table = ReportTableBuilder::build(&response, &DisplayOptions::default());
//! let output = FormatterFactory::create(OutputFormat::Markdown).format(&table)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod license_audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, SitePackagesReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::python::PythonInterpreter;
    pub use crate::application::dto::{AuditRequest, AuditResponse, DisplayOptions, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{ReportTable, ReportTableBuilder};
    pub use crate::application::use_cases::AuditLicensesUseCase;
    pub use crate::license_audit::domain::{
        Aggregation, FilterSpec, LicenseGroup, LicenseSource, MatchMode, PackageRecord,
        PolicySpec, ResolvedPackage, SortKey, Verdict,
    };
    pub use crate::license_audit::policies::{system_exclusions, SpdxMode, SYSTEM_PACKAGES};
    pub use crate::license_audit::services::{
        CodePage, LicenseExtractor, LicenseNormalizer, PackageFilter, PackageSorter,
        PolicyEvaluator, SummaryAggregator,
    };
    pub use crate::ports::outbound::{
        InstalledPackageSource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
