//! Report table read model
//!
//! Formatters only see headings and cell strings; every domain decision
//! (which packages, which order, which columns) is already made.

/// Ordered column headings plus one string row per package or group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    /// Column headings in display order
    pub columns: Vec<String>,
    /// Rows, each with exactly one cell per column
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the column count
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Position of a column by heading
    pub fn column_index(&self, heading: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == heading)
    }

    /// Cell of `row` under `heading`, if that column exists
    pub fn cell<'a>(&self, row: &'a [String], heading: &str) -> Option<&'a str> {
        self.column_index(heading)
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }

    /// Pairs every cell of `row` with its heading
    pub fn labelled<'a>(&'a self, row: &'a [String]) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(row.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
