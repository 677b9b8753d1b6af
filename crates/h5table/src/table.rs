//! Building the header and cell grid from selected series.

use h5table_render::{FormatSpec, TextTable, PLACEHOLDER};

use crate::selector::Series;

/// Header label of the row-number column.
pub const NUMBER_LABEL: &str = "#";

/// How the table is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Prepend a 1-based row number column.
    pub number_rows: bool,
    /// Use full paths instead of leaf names in the header.
    pub full_name: bool,
}

/// Header labels and formatted cells; every row has one cell per label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build the table from series already in column order.
    ///
    /// There is one row per value of the longest series; shorter series are
    /// padded with `-`. Columns without a format use the default `10.3e`.
    pub fn build(series: &[Series], formats: &[FormatSpec], options: &TableOptions) -> Self {
        let max_rows = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        let number_width = max_rows.to_string().len();

        let mut header = Vec::with_capacity(series.len() + usize::from(options.number_rows));
        if options.number_rows {
            header.push(NUMBER_LABEL.to_string());
        }
        header.extend(series.iter().map(|s| s.label(options.full_name).to_string()));

        let fallback = FormatSpec::default();
        let formats: Vec<&FormatSpec> = (0..series.len())
            .map(|i| formats.get(i).unwrap_or(&fallback))
            .collect();

        let rows = (0..max_rows)
            .map(|n| {
                let mut row = Vec::with_capacity(header.len());
                if options.number_rows {
                    row.push(format!("{:>number_width$}", n + 1));
                }
                row.extend(series.iter().zip(&formats).map(|(s, spec)| {
                    s.values
                        .get(n)
                        .map_or_else(|| PLACEHOLDER.to_string(), |v| spec.format(*v))
                }));
                row
            })
            .collect();

        Table { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns, including the row number column.
    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// True when there are no rows to write.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as aligned text lines: header, rule, then one line per row.
    pub fn render(&self, delimiter: &str) -> Vec<String> {
        TextTable::new(self.header.iter().cloned())
            .delimiter(delimiter)
            .render(&self.rows)
    }
}
