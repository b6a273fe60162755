use crate::application::read_models::{
    ReportTable, COLUMN_COUNT, COLUMN_LICENSE, COLUMN_LICENSE_CLASSIFIER, COLUMN_LICENSE_METADATA,
    COLUMN_NAME, COLUMN_VERSION,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::BTreeMap;

/// JsonFormatter adapter for JSON output
///
/// Renders one object per row, keyed by column heading. Keys are sorted and
/// the output is indented with four spaces.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn row_object(table: &ReportTable, row: &[String]) -> BTreeMap<String, Value> {
        table
            .labelled(row)
            .map(|(heading, cell)| (heading.to_string(), Self::cell_value(heading, cell)))
            .collect()
    }

    /// Group counts are numbers, everything else is a string
    fn cell_value(heading: &str, cell: &str) -> Value {
        if heading == COLUMN_COUNT {
            if let Ok(count) = cell.parse::<u64>() {
                return Value::from(count);
            }
        }
        Value::from(cell)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, table: &ReportTable) -> Result<String> {
        let rows: Vec<BTreeMap<String, Value>> = table
            .rows
            .iter()
            .map(|row| Self::row_object(table, row))
            .collect();

        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        rows.serialize(&mut serializer)?;

        Ok(String::from_utf8(buffer)?)
    }
}

/// One package entry in the LicenseFinder-compatible format
#[derive(Debug, Serialize)]
struct LicenseFinderEntry {
    licenses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// JsonLicenseFinderFormatter adapter for LicenseFinder-compatible JSON
///
/// Produces a compact array of `{licenses, name, version}` objects so that
/// reports can be merged with LicenseFinder output. Other columns are left
/// out.
pub struct JsonLicenseFinderFormatter;

impl JsonLicenseFinderFormatter {
    pub fn new() -> Self {
        Self
    }

    fn entry(table: &ReportTable, row: &[String]) -> LicenseFinderEntry {
        let licenses = match table.cell(row, COLUMN_LICENSE) {
            Some(license) => vec![license.to_string()],
            // Source "all" splits the license into metadata and classifier columns
            None => [COLUMN_LICENSE_METADATA, COLUMN_LICENSE_CLASSIFIER]
                .iter()
                .filter_map(|heading| table.cell(row, heading))
                .map(str::to_string)
                .collect(),
        };

        LicenseFinderEntry {
            licenses,
            name: table.cell(row, COLUMN_NAME).map(str::to_string),
            version: table.cell(row, COLUMN_VERSION).map(str::to_string),
        }
    }
}

impl Default for JsonLicenseFinderFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonLicenseFinderFormatter {
    fn format(&self, table: &ReportTable) -> Result<String> {
        let entries: Vec<LicenseFinderEntry> = table
            .rows
            .iter()
            .map(|row| Self::entry(table, row))
            .collect();

        Ok(serde_json::to_string(&entries)?)
    }
}
