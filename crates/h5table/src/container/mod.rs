//! Hierarchical containers.
//!
//! Readers turn a file into a tree of [`Node`]s. The tree is the only thing
//! the rest of the pipeline sees, so adding a format means adding a reader
//! that produces nodes; catalog building and selection stay untouched.
//!
//! | Extension | Format | Reader |
//! |-----------|--------|--------|
//! | `.h5`, `.hdf5`, `.he5`, `.nc`, others | HDF5 | `hdf5` cargo feature |
//! | `.json` | JSON | always available |

use std::path::Path;

use crate::error::{Error, Result};

#[cfg(feature = "hdf5")]
mod h5;
pub mod json;

/// A node of a hierarchical container.
///
/// Paths are slash-delimited from the root and start with `/` (`/b/c`); the
/// root group itself has an empty name and path.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Numeric data. `shape` is empty for scalars; `values` are row-major.
    Series {
        name: String,
        path: String,
        shape: Vec<usize>,
        values: Vec<f64>,
    },
    /// A group of further nodes.
    Group {
        name: String,
        path: String,
        children: Vec<Node>,
    },
    /// Anything that is neither numeric data nor a group.
    Unsupported {
        name: String,
        path: String,
        kind: String,
    },
}

impl Node {
    /// The root group holding `children`.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Group {
            name: String::new(),
            path: String::new(),
            children,
        }
    }

    /// A one-dimensional series at `path`; the name is the last path segment.
    pub fn series_at(path: &str, values: Vec<f64>) -> Self {
        Node::Series {
            name: leaf_name(path).to_string(),
            path: path.to_string(),
            shape: vec![values.len()],
            values,
        }
    }

    /// A group at `path`; the name is the last path segment.
    pub fn group_at(path: &str, children: Vec<Node>) -> Self {
        Node::Group {
            name: leaf_name(path).to_string(),
            path: path.to_string(),
            children,
        }
    }

    /// Leaf name of the node.
    pub fn name(&self) -> &str {
        match self {
            Node::Series { name, .. } | Node::Group { name, .. } | Node::Unsupported { name, .. } => {
                name
            }
        }
    }

    /// Full path of the node.
    pub fn path(&self) -> &str {
        match self {
            Node::Series { path, .. } | Node::Group { path, .. } | Node::Unsupported { path, .. } => {
                path
            }
        }
    }
}

/// Last segment of a slash-delimited path.
pub fn leaf_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Path of a child named `name` below `parent`.
pub(crate) fn child_path(parent: &str, name: &str) -> String {
    format!("{parent}/{name}")
}

/// File formats a container can be read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerFormat {
    Hdf5,
    Json,
}

impl ContainerFormat {
    /// Pick the format from the file extension. Unknown extensions are tried as HDF5.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => ContainerFormat::Json,
            _ => ContainerFormat::Hdf5,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            ContainerFormat::Hdf5 => "HDF5",
            ContainerFormat::Json => "JSON",
        }
    }
}

/// Read the container at `path` and return its root group.
pub fn open(path: &Path) -> Result<Node> {
    std::fs::metadata(path).map_err(|e| Error::io(path, e))?;

    let format = ContainerFormat::from_path(path);
    tracing::debug!(path = %path.display(), format = format.name(), "opening container");

    match format {
        ContainerFormat::Json => json::read(path),
        ContainerFormat::Hdf5 => read_hdf5(path),
    }
}

#[cfg(feature = "hdf5")]
fn read_hdf5(path: &Path) -> Result<Node> {
    h5::read(path)
}

#[cfg(not(feature = "hdf5"))]
fn read_hdf5(path: &Path) -> Result<Node> {
    Err(Error::FormatUnavailable {
        path: path.to_path_buf(),
        format: ContainerFormat::Hdf5.name(),
    })
}
