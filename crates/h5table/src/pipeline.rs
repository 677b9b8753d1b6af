//! The whole conversion, from container file to text file.

use std::path::PathBuf;

use h5table_render::DEFAULT_DELIMITER;

use crate::catalog::Catalog;
use crate::container;
use crate::diagnostics::{Diagnostics, Notice};
use crate::error::{Error, Result};
use crate::output;
use crate::precision;
use crate::selector::{select, Selection};
use crate::table::{Table, TableOptions};

/// Everything a conversion needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    /// Output file; defaults to the input path with a `txt` extension.
    pub output: Option<PathBuf>,
    pub columns: Vec<String>,
    pub precision: Vec<String>,
    pub ignore: Vec<String>,
    pub delimiter: String,
    pub full_name: bool,
    pub number: bool,
    pub overwrite: bool,
    /// Also print the table to stdout.
    pub preview: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: PathBuf::new(),
            output: None,
            columns: Vec::new(),
            precision: Vec::new(),
            ignore: Vec::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            full_name: false,
            number: false,
            overwrite: false,
            preview: false,
        }
    }
}

impl Options {
    /// Defaults for converting `input`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Options {
            input: input.into(),
            ..Options::default()
        }
    }

    /// The file the table is written to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| output::default_output_path(&self.input))
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.ignore.clone(), self.columns.clone())
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            number_rows: self.number,
            full_name: self.full_name,
        }
    }
}

/// What a conversion did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was selected; no file was written.
    Empty,
    /// The table was written to `path`.
    Written {
        path: PathBuf,
        rows: usize,
        columns: usize,
    },
}

/// Read `options.input`, build the table and write it.
pub fn convert(options: &Options, diagnostics: &mut Diagnostics) -> Result<Outcome> {
    let root = container::open(&options.input)?;
    let catalog = Catalog::from_node(&root, diagnostics);
    let table = build_table(&catalog, options, diagnostics)?;

    if table.is_empty() {
        diagnostics.record(Notice::EmptyResult);
        return Ok(Outcome::Empty);
    }

    let lines = table.render(&options.delimiter);
    if options.preview {
        output::preview(&lines, std::io::stdout().lock())
            .map_err(|e| Error::io("<stdout>", e))?;
    }

    let path = options.output_path();
    output::write_table(&lines, &path, options.overwrite)?;
    diagnostics.record(Notice::Written { path: path.clone() });

    Ok(Outcome::Written {
        path,
        rows: table.rows().len(),
        columns: table.num_columns(),
    })
}

/// Render the table for an in-memory catalog. Empty when nothing is selected.
pub fn render_lines(
    catalog: &Catalog,
    options: &Options,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<String>> {
    let table = build_table(catalog, options, diagnostics)?;
    if table.is_empty() {
        return Ok(Vec::new());
    }
    Ok(table.render(&options.delimiter))
}

fn build_table(catalog: &Catalog, options: &Options, diagnostics: &mut Diagnostics) -> Result<Table> {
    let series = select(catalog, &options.selection(), diagnostics);
    let formats = precision::resolve(&options.precision, series.len())?;
    Ok(Table::build(&series, &formats, &options.table_options()))
}
