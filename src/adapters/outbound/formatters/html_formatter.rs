use crate::application::read_models::ReportTable;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const INDENT: &str = "    ";

/// HtmlFormatter adapter for HTML table output
///
/// Produces a bare `<table>` element. Markup characters are escaped and
/// every non-ASCII character is written as a numeric character reference,
/// so the output is safe to embed in pages of any charset.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes a cell for HTML text content
    fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\n' => escaped.push_str("<br>"),
                '\r' => {}
                c if c.is_ascii() => escaped.push(c),
                c => escaped.push_str(&format!("&#{};", c as u32)),
            }
        }
        escaped
    }

    fn push_row(lines: &mut Vec<String>, cells: &[String], tag: &str) {
        lines.push(format!("{}{}<tr>", INDENT, INDENT));
        for cell in cells {
            lines.push(format!(
                "{}{}{}<{tag}>{}</{tag}>",
                INDENT,
                INDENT,
                INDENT,
                Self::escape_html(cell),
                tag = tag
            ));
        }
        lines.push(format!("{}{}</tr>", INDENT, INDENT));
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, table: &ReportTable) -> Result<String> {
        let mut lines = vec!["<table>".to_string()];

        lines.push(format!("{}<thead>", INDENT));
        Self::push_row(&mut lines, &table.columns, "th");
        lines.push(format!("{}</thead>", INDENT));

        lines.push(format!("{}<tbody>", INDENT));
        for row in &table.rows {
            Self::push_row(&mut lines, row, "td");
        }
        lines.push(format!("{}</tbody>", INDENT));

        lines.push("</table>".to_string());
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_structure() {
        let mut table = ReportTable::new(vec!["Name".to_string(), "License".to_string()]);
        table.push_row(vec!["idna".to_string(), "BSD License".to_string()]);

        let output = HtmlFormatter::new().format(&table).unwrap();

        let expected = "\
<table>
    <thead>
        <tr>
            <th>Name</th>
            <th>License</th>
        </tr>
    </thead>
    <tbody>
        <tr>
            <td>idna</td>
            <td>BSD License</td>
        </tr>
    </tbody>
</table>";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_escape_markup_and_newlines() {
        assert_eq!(
            HtmlFormatter::escape_html("<Tom & \"Jerry\">\nline"),
            "&lt;Tom &amp; &quot;Jerry&quot;&gt;<br>line"
        );
    }

    #[test]
    fn test_non_ascii_as_character_references() {
        assert_eq!(HtmlFormatter::escape_html("Jérôme"), "J&#233;r&#244;me");
        assert_eq!(HtmlFormatter::escape_html("山田"), "&#23665;&#30000;");
    }

    #[test]
    fn test_empty_table_keeps_tbody() {
        let table = ReportTable::new(vec!["Count".to_string()]);
        let output = HtmlFormatter::new().format(&table).unwrap();
        assert!(output.contains("<th>Count</th>"));
        assert!(output.contains("<tbody>\n    </tbody>"));
    }
}
