/// Outbound ports - Interfaces for infrastructure dependencies
pub mod formatter;
pub mod output_presenter;
pub mod package_source;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use package_source::InstalledPackageSource;
pub use progress_reporter::ProgressReporter;
