//! Aligned plain-text table rendering.
//!
//! A [`TextTable`] holds the header labels and the delimiter, and turns rows
//! of pre-formatted cells into lines:
//!
//! ```text
//! #      a           c        <- header, centered, right-trimmed
//! -------------------------   <- rule spanning every column and delimiter
//! 1   1.000e+00   4.000e+00   <- body, right-aligned, right-trimmed
//! ```
//!
//! Column sizes are the widest of the header label and every body cell in that
//! column, measured in display columns.
//!
//! # Example
//!
//! ```rust
//! use h5table_render::TextTable;
//!
//! let table = TextTable::new(["name", "v"]).delimiter(" | ");
//! let rows = vec![vec!["a", "1.0"], vec!["bb", "22.5"]];
//!
//! assert_eq!(
//!     table.render(&rows),
//!     vec!["name |  v", "-----------", "   a |  1.0", "  bb | 22.5"]
//! );
//! ```

use crate::util::{display_width, Align};

/// Delimiter placed between columns unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = "    ";

/// Cell content used where a column has no value for a row.
pub const PLACEHOLDER: &str = "-";

/// Character repeated to draw the rule under the header.
const RULE: char = '-';

/// A header plus layout settings for rendering rows as aligned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextTable {
    /// Column labels.
    header: Vec<String>,
    /// String placed between adjacent cells.
    delimiter: String,
    /// Alignment of header labels.
    header_align: Align,
    /// Alignment of body cells.
    body_align: Align,
}

impl TextTable {
    /// Create a table with the given header labels and default layout.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(header: I) -> Self {
        TextTable {
            header: header.into_iter().map(Into::into).collect(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            header_align: Align::Center,
            body_align: Align::Right,
        }
    }

    /// Set the delimiter placed between cells.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the alignment of header labels (centered by default).
    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }

    /// Set the alignment of body cells (right-aligned by default).
    pub fn body_align(mut self, align: Align) -> Self {
        self.body_align = align;
        self
    }

    /// The header labels.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The configured delimiter.
    pub fn get_delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// Width of every column: the widest of its label and its cells.
    ///
    /// Widths are terminal display columns, so a wide character counts as two.
    /// Cells beyond the number of header labels are not measured.
    pub fn column_sizes<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.header.iter().map(|h| display_width(h)).collect();

        for row in rows {
            for (size, cell) in sizes.iter_mut().zip(row) {
                *size = (*size).max(display_width(cell.as_ref()));
            }
        }

        sizes
    }

    /// Format the header line for the given column sizes.
    pub fn header_row(&self, sizes: &[usize]) -> String {
        self.join(&self.header, sizes, self.header_align)
    }

    /// The rule drawn between header and body.
    ///
    /// Its length covers every column and every delimiter between them.
    pub fn separator_row(&self, sizes: &[usize]) -> String {
        let delimiters = sizes.len().saturating_sub(1) * display_width(&self.delimiter);
        let total: usize = sizes.iter().sum::<usize>() + delimiters;
        std::iter::repeat(RULE).take(total).collect()
    }

    /// Format one body line for the given column sizes.
    pub fn row<S: AsRef<str>>(&self, cells: &[S], sizes: &[usize]) -> String {
        self.join(cells, sizes, self.body_align)
    }

    /// Render header, rule and every row.
    pub fn render<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Vec<String> {
        let sizes = self.column_sizes(rows);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(self.header_row(&sizes));
        lines.push(self.separator_row(&sizes));
        lines.extend(rows.iter().map(|row| self.row(row, &sizes)));
        lines
    }

    fn join<S: AsRef<str>>(&self, cells: &[S], sizes: &[usize], align: Align) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(sizes)
            .map(|(cell, size)| align.pad(cell.as_ref(), *size))
            .collect();
        padded.join(self.delimiter.as_str()).trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn column_sizes_take_widest_cell() {
        let table = TextTable::new(["a", "longer"]);
        let data = rows(&[&["12345", "x"], &["1", "yy"]]);
        assert_eq!(table.column_sizes(&data), vec![5, 6]);
    }

    #[test]
    fn column_sizes_without_rows_use_header() {
        let table = TextTable::new(["abc", "de"]);
        assert_eq!(table.column_sizes::<String>(&[]), vec![3, 2]);
    }

    #[test]
    fn header_is_centered_and_trimmed() {
        let table = TextTable::new(["#", "a", "c"]).delimiter("  ");
        let line = table.header_row(&[1, 10, 10]);
        assert_eq!(line, format!("#{}a{}c", " ".repeat(6), " ".repeat(11)));
    }

    #[test]
    fn separator_spans_columns_and_delimiters() {
        let table = TextTable::new(["a", "b", "c"]).delimiter("  ");
        assert_eq!(table.separator_row(&[1, 10, 10]), "-".repeat(25));

        let single = TextTable::new(["a"]);
        assert_eq!(single.separator_row(&[4]), "----");
    }

    #[test]
    fn separator_for_no_columns_is_empty() {
        let table = TextTable::new(Vec::<String>::new());
        assert_eq!(table.separator_row(&[]), "");
    }

    #[test]
    fn body_cells_are_right_aligned() {
        let table = TextTable::new(["x", "y"]).delimiter(",");
        assert_eq!(table.row(&["1", "22"], &[3, 3]), "  1, 22");
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let table = TextTable::new(["x", "y"])
            .delimiter("  ")
            .body_align(Align::Left);
        assert_eq!(table.row(&["1", "2"], &[3, 3]), "1    2");
    }

    #[test]
    fn render_produces_header_rule_and_rows() {
        let table = TextTable::new(["value"]).delimiter("  ");
        let data = rows(&[&["1.5"], &["-"]]);
        assert_eq!(table.render(&data), vec!["value", "-----", "  1.5", "    -"]);
    }

    #[test]
    fn render_without_rows_still_has_header_and_rule() {
        let table = TextTable::new(["ab"]);
        assert_eq!(table.render::<String>(&[]), vec!["ab", "--"]);
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        let table = TextTable::new(["日本", "x"]).delimiter(" ");
        let data = rows(&[&["1", "2"]]);
        let lines = table.render(&data);
        assert_eq!(lines[0], "日本 x");
        assert_eq!(lines[1], "------");
        assert_eq!(lines[2], "   1 2");
    }

    #[test]
    fn delimiter_accessors() {
        let table = TextTable::new(["a"]);
        assert_eq!(table.get_delimiter(), DEFAULT_DELIMITER);
        assert_eq!(table.num_columns(), 1);
        assert_eq!(table.header(), &["a".to_string()]);
    }
}
