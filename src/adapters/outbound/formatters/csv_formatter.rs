use crate::application::read_models::ReportTable;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// CsvFormatter adapter for comma-separated output
///
/// Every field is quoted and embedded quotes are doubled, so license texts
/// containing commas or newlines survive a round trip through spreadsheet
/// tools.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }

    fn line(fields: &[String]) -> String {
        fields
            .iter()
            .map(|field| Self::quote(field))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, table: &ReportTable) -> Result<String> {
        let mut lines = Vec::with_capacity(table.rows.len() + 1);
        lines.push(Self::line(&table.columns));
        lines.extend(table.rows.iter().map(|row| Self::line(row)));
        Ok(lines.join("\n"))
    }
}
