/// ProgressReporter port for audit diagnostics
///
/// Everything the audit wants to tell the user besides the report itself
/// goes through this port: stage messages, per-package progress while
/// licenses are resolved, and non-fatal warnings. Implementations must not
/// write to stdout, which is reserved for the report.
pub trait ProgressReporter {
    /// Reports a stage message such as "Reading installed package metadata..."
    fn report(&self, message: &str);

    /// Reports that package `current` of `total` is being processed
    ///
    /// `message` is usually the package name.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning; the audit keeps going afterwards
    fn report_error(&self, message: &str);

    /// Reports the end of a stage that used `report_progress`
    fn report_completion(&self, message: &str);
}
