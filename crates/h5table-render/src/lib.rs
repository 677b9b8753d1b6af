//! # h5table-render - Aligned plain-text tables
//!
//! `h5table-render` turns a header and a grid of already formatted cells into
//! column-aligned text lines, and provides the printf-style numeric format
//! mini-language used to produce those cells.
//!
//! This crate is the rendering foundation for the `h5table` converter, but can
//! be used independently for any tool that writes fixed-layout text tables.
//!
//! ## Core Concepts
//!
//! - [`FormatSpec`]: A parsed numeric format token such as `10.3e` or `.2f`
//! - [`TextTable`]: Computes column sizes and renders header, rule and body lines
//! - Padding helpers ([`pad_left`], [`pad_center`], ...) that measure display width,
//!   not bytes
//!
//! ## Quick Start
//!
//! ```rust
//! use h5table_render::{FormatSpec, TextTable};
//!
//! let spec = FormatSpec::parse("8.2f").unwrap();
//! let rows = vec![
//!     vec![spec.format(1.5), spec.format(-20.25)],
//!     vec![spec.format(3.0), "-".to_string()],
//! ];
//!
//! let lines = TextTable::new(["x", "y"]).delimiter("  ").render(&rows);
//!
//! assert_eq!(lines[0], "   x         y");
//! assert_eq!(lines[1], "------------------");
//! assert_eq!(lines[2], "    1.50    -20.25");
//! assert_eq!(lines[3], "    3.00         -");
//! ```
//!
//! ## Format Tokens
//!
//! | Token | Output for `1234.56` |
//! |-------|----------------------|
//! | `10.3e` | ` 1.235e+03` |
//! | `.1f` | `1234.6` |
//! | `g` | `1234.56` |
//! | `+012.2f` | `+00001234.56` |
//! | `<10.1f` | `1234.6    ` |

mod error;
pub mod format_spec;
pub mod text_table;
mod util;

pub use error::FormatSpecError;
pub use format_spec::{FormatSpec, NumericStyle, Sign, DEFAULT_FORMAT};
pub use text_table::{TextTable, DEFAULT_DELIMITER, PLACEHOLDER};
pub use util::{display_width, pad_center, pad_left, pad_right, Align};
