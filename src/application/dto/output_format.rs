/// Output format enumeration for license reports
///
/// This enum represents the supported report formats. It belongs in the
/// application layer because both the CLI (inbound) and the formatters
/// (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Space-padded columns without borders (default)
    #[default]
    Plain,
    /// One value per line, packages separated by a blank line
    PlainVertical,
    /// Pipe table
    Markdown,
    /// reStructuredText grid table
    Rst,
    /// Confluence wiki markup table
    Confluence,
    /// HTML `<table>`
    Html,
    /// Pretty-printed JSON array of objects
    Json,
    /// Compact JSON in the LicenseFinder decisions layout
    JsonLicenseFinder,
    /// Comma-separated values, every field quoted
    Csv,
}

impl OutputFormat {
    pub const VARIANTS: &'static str = "plain (p), plain-vertical, markdown (md, m), rst (rest, r), \
         confluence (c), html (h), json (j), json-license-finder (jlf), csv";

    /// True for the formats that can hold long license texts comfortably
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "p" => Ok(OutputFormat::Plain),
            "plain-vertical" => Ok(OutputFormat::PlainVertical),
            "markdown" | "md" | "m" => Ok(OutputFormat::Markdown),
            "rst" | "rest" | "r" => Ok(OutputFormat::Rst),
            "confluence" | "c" => Ok(OutputFormat::Confluence),
            "html" | "h" => Ok(OutputFormat::Html),
            "json" | "j" => Ok(OutputFormat::Json),
            "json-license-finder" | "jlf" => Ok(OutputFormat::JsonLicenseFinder),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Invalid format: {}. Please specify one of: {}",
                s,
                Self::VARIANTS
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::PlainVertical => "plain-vertical",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Rst => "rst",
            OutputFormat::Confluence => "confluence",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::JsonLicenseFinder => "json-license-finder",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_canonical_names() {
        for format in [
            OutputFormat::Plain,
            OutputFormat::PlainVertical,
            OutputFormat::Markdown,
            OutputFormat::Rst,
            OutputFormat::Confluence,
            OutputFormat::Html,
            OutputFormat::Json,
            OutputFormat::JsonLicenseFinder,
            OutputFormat::Csv,
        ] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_from_str_aliases() {
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("m").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("rest").unwrap(), OutputFormat::Rst);
        assert_eq!(OutputFormat::from_str("c").unwrap(), OutputFormat::Confluence);
        assert_eq!(
            OutputFormat::from_str("jlf").unwrap(),
            OutputFormat::JsonLicenseFinder
        );
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Html").unwrap(), OutputFormat::Html);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let message = OutputFormat::from_str("yaml").unwrap_err();
        assert!(message.contains("Invalid format"));
        assert!(message.contains("yaml"));
        assert!(message.contains("json-license-finder"));
    }

    #[test]
    fn test_output_format_default_is_plain() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }
}
