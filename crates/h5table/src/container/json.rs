//! JSON rendition of a hierarchical container.
//!
//! The document root must be an object. Objects are groups, numbers are
//! scalar series, and arrays of numbers (nested to any depth, as long as they
//! are rectangular) are series with the matching shape. Everything else is
//! reported as unsupported.
//!
//! ```json
//! { "a": [1.0, 2.0, 3.0], "b": { "c": [4.0, 5.0], "grid": [[1, 2], [3, 4]] } }
//! ```

use std::path::Path;

use serde_json::Value;

use super::{child_path, Node};
use crate::error::{Error, Result};

/// Read and convert a JSON file.
pub fn read(path: &Path) -> Result<Node> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    from_str(&text).map_err(|message| Error::container(path, message))
}

/// Parse a JSON document into a root group.
pub fn from_str(text: &str) -> std::result::Result<Node, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    from_value(&value)
}

/// Convert a parsed document into a root group.
pub fn from_value(value: &Value) -> std::result::Result<Node, String> {
    match value {
        Value::Object(map) => Ok(Node::root(
            map.iter()
                .map(|(name, child)| convert(name, child_path("", name), child))
                .collect(),
        )),
        other => Err(format!(
            "top-level JSON value must be an object, found {}",
            kind_of(other)
        )),
    }
}

fn convert(name: &str, path: String, value: &Value) -> Node {
    let name = name.to_string();
    match value {
        Value::Object(map) => {
            let children = map
                .iter()
                .map(|(child, v)| convert(child, child_path(&path, child), v))
                .collect();
            Node::Group {
                name,
                path,
                children,
            }
        }
        Value::Number(n) => Node::Series {
            name,
            path,
            shape: Vec::new(),
            values: vec![n.as_f64().unwrap_or(f64::NAN)],
        },
        Value::Array(_) => {
            let mut grid = Grid::default();
            match grid.visit(value, 0) {
                Ok(()) => Node::Series {
                    name,
                    path,
                    shape: grid.shape,
                    values: grid.values,
                },
                Err(kind) => Node::Unsupported {
                    name,
                    path,
                    kind: kind.to_string(),
                },
            }
        }
        other => Node::Unsupported {
            name,
            path,
            kind: kind_of(other).to_string(),
        },
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accumulates the shape and row-major values of a nested numeric array.
#[derive(Default)]
struct Grid {
    shape: Vec<usize>,
    values: Vec<f64>,
    leaf_depth: Option<usize>,
}

impl Grid {
    fn visit(&mut self, value: &Value, depth: usize) -> std::result::Result<(), &'static str> {
        match value {
            Value::Array(items) => {
                if self.leaf_depth.is_some_and(|leaf| depth >= leaf) {
                    return Err("ragged array");
                }
                match self.shape.get(depth) {
                    Some(&len) if len != items.len() => return Err("ragged array"),
                    Some(_) => {}
                    None => self.shape.push(items.len()),
                }
                items.iter().try_for_each(|item| self.visit(item, depth + 1))
            }
            Value::Number(n) => {
                match self.leaf_depth {
                    Some(leaf) if leaf != depth => return Err("ragged array"),
                    Some(_) => {}
                    None => {
                        if self.shape.len() != depth {
                            return Err("ragged array");
                        }
                        self.leaf_depth = Some(depth);
                    }
                }
                self.values.push(n.as_f64().unwrap_or(f64::NAN));
                Ok(())
            }
            _ => Err("array of non-numeric values"),
        }
    }
}
