use crate::application::read_models::ReportTable;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// PlainVerticalFormatter adapter for one-value-per-line output
///
/// Each row is written as its values on consecutive lines, without
/// headings, followed by a blank line.
pub struct PlainVerticalFormatter;

impl PlainVerticalFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainVerticalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PlainVerticalFormatter {
    fn format(&self, table: &ReportTable) -> Result<String> {
        let mut output = String::new();
        for row in &table.rows {
            for value in row {
                output.push_str(value);
                output.push('\n');
            }
            output.push('\n');
        }
        Ok(output)
    }
}
