use crate::application::read_models::ReportTable;
use crate::shared::Result;

/// ReportFormatter port for rendering the license report
///
/// This port abstracts the formatting logic for the supported report
/// formats (plain table, Markdown, JSON, CSV, etc.).
pub trait ReportFormatter {
    /// Renders the report table
    ///
    /// # Arguments
    /// * `table` - Column headings and rows, already ordered
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, table: &ReportTable) -> Result<String>;
}
