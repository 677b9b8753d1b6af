//! Writing rendered lines.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Where the table goes when no output path is given: the input path with a
/// `txt` extension.
///
/// ```
/// use std::path::Path;
/// use h5table::output::default_output_path;
///
/// assert_eq!(default_output_path(Path::new("runs/data.h5")), Path::new("runs/data.txt"));
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Write `lines` joined by newlines, without a newline after the last one.
///
/// An existing file is only replaced when `overwrite` is set; otherwise it is
/// left untouched and [`Error::DestinationExists`] is returned.
pub fn write_table<S: AsRef<str>>(lines: &[S], path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(Error::DestinationExists(path.to_path_buf()));
    }

    let text = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    std::fs::write(path, text).map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "table written");
    Ok(())
}

/// Print every line followed by a newline.
pub fn preview<S: AsRef<str>, W: Write>(lines: &[S], mut writer: W) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()
}
