//! One numeric format per column.

use h5table_render::FormatSpec;

use crate::error::{Error, Result};

/// Resolve precision tokens against the number of columns.
///
/// No tokens gives every column the default `10.3e`, a single token is
/// shared by all columns, and otherwise there must be exactly one token per
/// column.
///
/// ```
/// use h5table::precision::resolve;
///
/// let specs = resolve(&["8.2f".to_string()], 3).unwrap();
/// assert_eq!(specs.len(), 3);
/// assert!(resolve(&["8.2f".to_string(), "e".to_string()], 3).is_err());
/// ```
pub fn resolve(tokens: &[String], columns: usize) -> Result<Vec<FormatSpec>> {
    match tokens.len() {
        0 => Ok(vec![FormatSpec::default(); columns]),
        1 => Ok(vec![parse(&tokens[0])?; columns]),
        n if n == columns => tokens.iter().map(|t| parse(t)).collect(),
        n => Err(Error::Configuration {
            expected: columns,
            actual: n,
        }),
    }
}

/// Split a comma-separated list of format tokens.
///
/// Items are kept verbatim: blanks are part of a token (` .1f` asks for a
/// space before positive values) and an empty item is the untyped format.
///
/// ```
/// use h5table::precision::split_formats;
///
/// assert_eq!(split_formats(" .1f,,e"), [" .1f", "", "e"]);
/// ```
pub fn split_formats(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

fn parse(token: &str) -> Result<FormatSpec> {
    FormatSpec::parse(token).map_err(|source| Error::InvalidFormat {
        token: token.to_string(),
        source,
    })
}
