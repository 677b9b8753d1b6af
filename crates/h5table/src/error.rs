//! Error types for the conversion pipeline.
//!
//! Everything here is fatal: the run stops before any file is written.
//! Non-fatal conditions (skipped entries, empty tables) are reported through
//! [`Diagnostics`](crate::Diagnostics) instead.

use std::path::PathBuf;

use h5table_render::FormatSpecError;
use thiserror::Error;

/// Errors that abort a conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// The number of precision tokens matches neither one nor the column count.
    #[error(
        "number of precision format strings is {actual} but does not match number of columns of {expected}"
    )]
    Configuration { expected: usize, actual: usize },

    /// A precision token could not be parsed.
    #[error("invalid precision format string '{token}'")]
    InvalidFormat {
        token: String,
        #[source]
        source: FormatSpecError,
    },

    /// The output file exists and overwriting was not requested.
    #[error("file already exists: {} (use --overwrite to overwrite)", .0.display())]
    DestinationExists(PathBuf),

    /// The input container could not be read.
    #[error("cannot read {}: {message}", .path.display())]
    Container { path: PathBuf, message: String },

    /// The input format is recognised but its reader is not compiled in.
    #[error("cannot read {}: {format} support is not enabled in this build", .path.display())]
    FormatUnavailable { path: PathBuf, format: &'static str },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a container error.
    pub fn container(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Container {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_cites_both_counts() {
        let err = Error::Configuration {
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("is 2"));
        assert!(msg.contains("columns of 3"));
    }

    #[test]
    fn destination_exists_names_path_and_flag() {
        let err = Error::DestinationExists(PathBuf::from("out/table.txt"));
        let msg = err.to_string();
        assert!(msg.contains("out/table.txt"));
        assert!(msg.contains("--overwrite"));
    }

    #[test]
    fn invalid_format_keeps_source() {
        let source = h5table_render::FormatSpec::parse("1.2q").unwrap_err();
        let err = Error::InvalidFormat {
            token: "1.2q".to_string(),
            source,
        };
        assert!(err.to_string().contains("1.2q"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_helper_wraps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io("/tmp/x", io_err);
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/tmp/x"));
    }
}
