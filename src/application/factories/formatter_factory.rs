use crate::adapters::outbound::formatters::{
    CsvFormatter, HtmlFormatter, JsonFormatter, JsonLicenseFinderFormatter, PlainVerticalFormatter,
    TableFormatter, TableStyle,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use py_licenses::application::dto::OutputFormat;
    /// use py_licenses::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Plain => Box::new(TableFormatter::new(TableStyle::Plain)),
            OutputFormat::Markdown => Box::new(TableFormatter::new(TableStyle::Markdown)),
            OutputFormat::Rst => Box::new(TableFormatter::new(TableStyle::Rst)),
            OutputFormat::Confluence => Box::new(TableFormatter::new(TableStyle::Confluence)),
            OutputFormat::PlainVertical => Box::new(PlainVerticalFormatter::new()),
            OutputFormat::Html => Box::new(HtmlFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::JsonLicenseFinder => Box::new(JsonLicenseFinderFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use py_licenses::application::dto::OutputFormat;
    /// use py_licenses::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Csv);
    /// assert_eq!(message, "📝 Generating CSV report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Plain => "📝 Generating plain text report...",
            OutputFormat::PlainVertical => "📝 Generating plain vertical report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
            OutputFormat::Rst => "📝 Generating reStructuredText report...",
            OutputFormat::Confluence => "📝 Generating Confluence report...",
            OutputFormat::Html => "📝 Generating HTML report...",
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::JsonLicenseFinder => "📝 Generating JSON LicenseFinder report...",
            OutputFormat::Csv => "📝 Generating CSV report...",
        }
    }
}
