//! HDF5 reader, built with the `hdf5` cargo feature.

use std::path::Path;

use hdf5::types::TypeDescriptor;

use super::{child_path, Node};
use crate::error::{Error, Result};

/// Kind reported for members that open as neither group nor dataset, such as
/// named datatypes or dangling links.
const OTHER_MEMBER: &str = "unsupported object";

/// Open an HDF5 file and convert its group hierarchy.
pub(crate) fn read(path: &Path) -> Result<Node> {
    let file = hdf5::File::open(path).map_err(|e| Error::container(path, e.to_string()))?;
    let children = read_group(&file, "", path)?;
    Ok(Node::root(children))
}

fn read_group(group: &hdf5::Group, prefix: &str, file: &Path) -> Result<Vec<Node>> {
    let names = group
        .member_names()
        .map_err(|e| Error::container(file, e.to_string()))?;

    let mut children = Vec::with_capacity(names.len());
    for name in names {
        let path = child_path(prefix, &name);
        if let Ok(sub) = group.group(&name) {
            let grandchildren = read_group(&sub, &path, file)?;
            children.push(Node::Group {
                name,
                path,
                children: grandchildren,
            });
        } else if let Ok(dataset) = group.dataset(&name) {
            children.push(read_dataset(&dataset, name, path));
        } else {
            children.push(Node::Unsupported {
                name,
                path,
                kind: OTHER_MEMBER.to_string(),
            });
        }
    }
    Ok(children)
}

fn read_dataset(dataset: &hdf5::Dataset, name: String, path: String) -> Node {
    let descriptor = match dataset.dtype().and_then(|dtype| dtype.to_descriptor()) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            return Node::Unsupported {
                name,
                path,
                kind: e.to_string(),
            }
        }
    };

    match descriptor {
        TypeDescriptor::Integer(_) | TypeDescriptor::Unsigned(_) | TypeDescriptor::Float(_) => {
            match dataset.read_raw::<f64>() {
                Ok(values) => Node::Series {
                    name,
                    path,
                    shape: dataset.shape(),
                    values,
                },
                Err(e) => Node::Unsupported {
                    name,
                    path,
                    kind: e.to_string(),
                },
            }
        }
        other => Node::Unsupported {
            name,
            path,
            kind: other.to_string(),
        },
    }
}
