/// Formatter adapters for the supported report formats
mod csv_formatter;
mod html_formatter;
mod json_formatter;
mod plain_vertical_formatter;
mod table_formatter;

pub use csv_formatter::CsvFormatter;
pub use html_formatter::HtmlFormatter;
pub use json_formatter::{JsonFormatter, JsonLicenseFinderFormatter};
pub use plain_vertical_formatter::PlainVerticalFormatter;
pub use table_formatter::{TableFormatter, TableStyle};
