//! # h5table - numeric datasets to aligned text tables
//!
//! `h5table` reads a hierarchical container (HDF5, or a JSON rendition of
//! one), picks out its one-dimensional numeric datasets and writes them side
//! by side as a fixed-width text table, one column per dataset.
//!
//! ## Pipeline
//!
//! ```text
//! container::open -> Catalog::from_node -> select -> precision::resolve
//!                 -> Table::build -> Table::render -> output::write_table
//! ```
//!
//! Each stage returns a new value and reports what it skipped through a
//! shared [`Diagnostics`] sink. [`pipeline::convert`] runs all of them;
//! [`pipeline::render_lines`] runs the pure part on an in-memory catalog.
//!
//! ## Quick start
//!
//! ```
//! use h5table::{render_lines, Catalog, CatalogEntry, Diagnostics, Options};
//!
//! let catalog = Catalog::from_entries(vec![
//!     CatalogEntry::new("/a", vec![1.0, 2.0, 3.0]),
//!     CatalogEntry::new("/b/c", vec![4.0, 5.0]),
//! ]);
//! let options = Options {
//!     precision: vec!["6.2f".to_string()],
//!     delimiter: "  ".to_string(),
//!     ..Options::default()
//! };
//!
//! let lines = render_lines(&catalog, &options, &mut Diagnostics::silent()).unwrap();
//! assert_eq!(lines, vec![
//!     "  a       c",
//!     "--------------",
//!     "  1.00    4.00",
//!     "  2.00    5.00",
//!     "  3.00       -",
//! ]);
//! ```
//!
//! ## Selection rules
//!
//! - Only one-dimensional datasets with at least two values become columns.
//! - `ignore` tokens (path or leaf name) always exclude a dataset.
//! - `columns` tokens pick datasets by path first, then by leaf name, and fix
//!   the column order; without them columns are sorted by path.
//!
//! ## Formats
//!
//! Precision tokens use the float format mini-language of
//! [`h5table_render::FormatSpec`]; the default is `10.3e`.
//!
//! ## Features
//!
//! - `hdf5`: read HDF5 files through the `hdf5-metno` crate (needs the HDF5
//!   system library). Without it only JSON containers can be read.

pub mod catalog;
pub mod container;
pub mod diagnostics;
mod error;
pub mod output;
pub mod pipeline;
pub mod precision;
pub mod selector;
pub mod table;

pub use catalog::{Catalog, CatalogEntry};
pub use container::{ContainerFormat, Node};
pub use diagnostics::{Diagnostics, Notice, SkipReason};
pub use error::{Error, Result};
pub use output::{default_output_path, preview, write_table};
pub use pipeline::{convert, render_lines, Options, Outcome};
pub use precision::resolve;
pub use selector::{select, Selection, Series};
pub use table::{Table, TableOptions};

pub use h5table_render::{FormatSpec, FormatSpecError, TextTable};
