use crate::application::read_models::ReportTable;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Text table layouts rendered by [`TableFormatter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Space-padded columns without borders
    Plain,
    /// Pipe table with a header rule
    Markdown,
    /// reStructuredText grid table
    Rst,
    /// Confluence wiki markup
    Confluence,
}

impl TableStyle {
    /// Whether cells may span several lines in this style
    fn allows_multiline(self) -> bool {
        matches!(self, TableStyle::Plain | TableStyle::Rst)
    }
}

/// TableFormatter adapter for column-aligned text tables
///
/// This adapter implements the ReportFormatter port for the plain, Markdown,
/// reStructuredText and Confluence formats. All columns are left-aligned.
pub struct TableFormatter {
    style: TableStyle,
}

/// One table row split into the physical lines of each cell
type CellLines = Vec<Vec<String>>;

impl TableFormatter {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    /// Escapes pipe characters and newlines for single-line table cells
    fn escape_single_line_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn split_cell(&self, cell: &str) -> Vec<String> {
        if self.style.allows_multiline() {
            let lines: Vec<String> = cell.lines().map(str::to_string).collect();
            if lines.is_empty() {
                vec![String::new()]
            } else {
                lines
            }
        } else {
            vec![Self::escape_single_line_cell(cell)]
        }
    }

    fn split_row(&self, row: &[String]) -> CellLines {
        row.iter().map(|cell| self.split_cell(cell)).collect()
    }

    fn column_widths(rows: &[CellLines], column_count: usize) -> Vec<usize> {
        let mut widths = vec![0; column_count];
        for row in rows {
            for (width, lines) in widths.iter_mut().zip(row) {
                for line in lines {
                    *width = (*width).max(line.chars().count());
                }
            }
        }
        widths
    }

    /// Renders one logical row as padded physical lines
    fn padded_lines(row: &CellLines, widths: &[usize], separator: &str, edges: bool) -> Vec<String> {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        (0..height)
            .map(|line_index| {
                let cells: Vec<String> = row
                    .iter()
                    .zip(widths)
                    .map(|(lines, width)| {
                        let text = lines.get(line_index).map(String::as_str).unwrap_or("");
                        format!(" {:<width$} ", text, width = width)
                    })
                    .collect();
                let body = cells.join(separator);
                if edges {
                    format!("{}{}{}", separator, body, separator)
                } else {
                    body.trim_end().to_string()
                }
            })
            .collect()
    }

    fn rule(widths: &[usize], junction: char, fill: char) -> String {
        let mut rule = String::new();
        rule.push(junction);
        for width in widths {
            rule.extend(std::iter::repeat(fill).take(width + 2));
            rule.push(junction);
        }
        rule
    }

    fn render_plain(header: &CellLines, rows: &[CellLines], widths: &[usize]) -> Vec<String> {
        let mut lines = Self::padded_lines(header, widths, "", false);
        for row in rows {
            lines.extend(Self::padded_lines(row, widths, "", false));
        }
        lines
    }

    fn render_markdown(header: &CellLines, rows: &[CellLines], widths: &[usize]) -> Vec<String> {
        let mut lines = Self::padded_lines(header, widths, "|", true);
        lines.push(Self::rule(widths, '|', '-'));
        for row in rows {
            lines.extend(Self::padded_lines(row, widths, "|", true));
        }
        lines
    }

    fn render_rst(header: &CellLines, rows: &[CellLines], widths: &[usize]) -> Vec<String> {
        let separator = Self::rule(widths, '+', '-');
        let mut lines = vec![separator.clone()];
        lines.extend(Self::padded_lines(header, widths, "|", true));
        lines.push(Self::rule(widths, '+', '='));
        for row in rows {
            lines.extend(Self::padded_lines(row, widths, "|", true));
            lines.push(separator.clone());
        }
        lines
    }

    fn render_confluence(header: &CellLines, rows: &[CellLines]) -> Vec<String> {
        let join = |row: &CellLines, delimiter: &str| {
            let cells: Vec<String> = row.iter().map(|lines| lines.concat()).collect();
            format!("{} {} {}", delimiter, cells.join(&format!(" {} ", delimiter)), delimiter)
        };

        let mut lines = vec![join(header, "||")];
        lines.extend(rows.iter().map(|row| join(row, "|")));
        lines
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, table: &ReportTable) -> Result<String> {
        let header = self.split_row(&table.columns);
        let rows: Vec<CellLines> = table.rows.iter().map(|row| self.split_row(row)).collect();

        let mut all_rows = vec![header.clone()];
        all_rows.extend(rows.iter().cloned());
        let widths = Self::column_widths(&all_rows, table.columns.len());

        let lines = match self.style {
            TableStyle::Plain => Self::render_plain(&header, &rows, &widths),
            TableStyle::Markdown => Self::render_markdown(&header, &rows, &widths),
            TableStyle::Rst => Self::render_rst(&header, &rows, &widths),
            TableStyle::Confluence => Self::render_confluence(&header, &rows),
        };

        Ok(lines.join("\n"))
    }
}
