//! Flat list of every numeric leaf of a container.

use crate::container::{leaf_name, Node};
use crate::diagnostics::{Diagnostics, Notice};

/// A numeric leaf found in the container, before any shape filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub path: String,
    pub shape: Vec<usize>,
    pub values: Vec<f64>,
}

impl CatalogEntry {
    /// A one-dimensional entry at `path`.
    pub fn new(path: impl Into<String>, values: Vec<f64>) -> Self {
        let path = path.into();
        CatalogEntry {
            name: leaf_name(&path).to_string(),
            shape: vec![values.len()],
            path,
            values,
        }
    }

    /// Entry with an explicit shape.
    pub fn with_shape(path: impl Into<String>, shape: Vec<usize>, values: Vec<f64>) -> Self {
        let path = path.into();
        CatalogEntry {
            name: leaf_name(&path).to_string(),
            path,
            shape,
            values,
        }
    }

    /// Number of dimensions; zero for scalars.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }
}

/// Every numeric leaf reachable from the root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Walk `root` recursively. Unsupported nodes are reported and skipped.
    pub fn from_node(root: &Node, diagnostics: &mut Diagnostics) -> Self {
        let mut entries = Vec::new();
        collect(root, &mut entries, diagnostics);
        tracing::debug!(entries = entries.len(), "catalog built");
        Catalog { entries }
    }

    /// Catalog holding exactly `entries`.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Catalog { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Catalog::from_entries(iter.into_iter().collect())
    }
}

fn collect(node: &Node, entries: &mut Vec<CatalogEntry>, diagnostics: &mut Diagnostics) {
    match node {
        Node::Group { children, .. } => {
            for child in children {
                collect(child, entries, diagnostics);
            }
        }
        Node::Series {
            name,
            path,
            shape,
            values,
        } => entries.push(CatalogEntry {
            name: name.clone(),
            path: path.clone(),
            shape: shape.clone(),
            values: values.clone(),
        }),
        Node::Unsupported { path, kind, .. } => diagnostics.record(Notice::UnsupportedNode {
            path: path.clone(),
            kind: kind.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::root(vec![
            Node::series_at("/a", vec![1.0, 2.0, 3.0]),
            Node::group_at(
                "/b",
                vec![
                    Node::series_at("/b/c", vec![4.0, 5.0]),
                    Node::group_at("/b/d", vec![Node::series_at("/b/d/e", vec![6.0, 7.0])]),
                ],
            ),
            Node::Unsupported {
                name: "label".into(),
                path: "/label".into(),
                kind: "string".into(),
            },
        ])
    }

    #[test]
    fn collects_every_nested_series() {
        let mut diag = Diagnostics::silent();
        let catalog = Catalog::from_node(&sample(), &mut diag);

        let mut paths: Vec<&str> = catalog.entries().iter().map(|e| e.path.as_str()).collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["/a", "/b/c", "/b/d/e"]);

        let e = catalog.entries().iter().find(|e| e.path == "/b/d/e").unwrap();
        assert_eq!(e.name, "e");
    }

    #[test]
    fn unsupported_nodes_become_notices() {
        let mut diag = Diagnostics::silent();
        let catalog = Catalog::from_node(&sample(), &mut diag);

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            diag.notices(),
            &[Notice::UnsupportedNode {
                path: "/label".into(),
                kind: "string".into(),
            }]
        );
    }

    #[test]
    fn no_shape_filtering_happens_here() {
        let root = Node::root(vec![
            Node::Series {
                name: "dt".into(),
                path: "/dt".into(),
                shape: vec![],
                values: vec![0.1],
            },
            Node::Series {
                name: "grid".into(),
                path: "/grid".into(),
                shape: vec![2, 2],
                values: vec![1.0, 2.0, 3.0, 4.0],
            },
        ]);
        let catalog = Catalog::from_node(&root, &mut Diagnostics::silent());
        assert_eq!(catalog.len(), 2);

        let dt = &catalog.entries()[0];
        assert_eq!((dt.ndim(), dt.size()), (0, 1));
        let grid = &catalog.entries()[1];
        assert_eq!((grid.ndim(), grid.size()), (2, 4));
    }

    #[test]
    fn empty_root_gives_empty_catalog() {
        let catalog = Catalog::from_node(&Node::root(vec![]), &mut Diagnostics::silent());
        assert!(catalog.is_empty());
    }
}
