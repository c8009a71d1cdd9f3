//! Dotted-path access over a value tree.
//!
//! `hero.title.main` walks objects by key; numeric segments index arrays
//! (`navigation.links.0.href`).

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors from [`set_path`]. Lookups never fail, they return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path `{0}` has an empty segment")]
    EmptySegment(String),

    #[error("`{path}` holds a plain value, cannot descend into it")]
    NotContainer { path: String },

    #[error("`{segment}` is not a valid index into `{path}` (length {len})")]
    BadIndex {
        path: String,
        segment: String,
        len: usize,
    },
}

/// Split a dotted path into its segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

/// Look up a dotted path. Any missing segment yields `None`.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    split_path(path)
        .into_iter()
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Assign `value` at a dotted path, creating intermediate objects as needed.
///
/// A `null` on the way is replaced by an empty object. Array segments must
/// index an existing element, except the last segment which may also append
/// (`index == len`).
pub fn set_path(root: &mut Value, path: &str, value: Value) -> Result<(), PathError> {
    let segments = split_path(path);
    if segments.iter().any(|s| s.is_empty()) {
        return Err(PathError::EmptySegment(path.to_string()));
    }

    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| PathError::EmptySegment(path.to_string()))?;

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        if current.is_null() {
            *current = Value::Object(Map::new());
        }
        current = match current {
            Value::Object(map) => map.entry(segment.to_string()).or_insert(Value::Null),
            Value::Array(items) => {
                let len = items.len();
                let index = parse_index(segment)
                    .filter(|i| *i < len)
                    .ok_or_else(|| bad_index(&segments[..depth], segment, len))?;
                &mut items[index]
            }
            _ => {
                return Err(PathError::NotContainer {
                    path: segments[..depth].join("."),
                });
            }
        };
    }

    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
        }
        Value::Array(items) => {
            let len = items.len();
            match parse_index(last) {
                Some(index) if index < len => items[index] = value,
                Some(index) if index == len => items.push(value),
                _ => return Err(bad_index(parents, last, len)),
            }
        }
        _ => {
            return Err(PathError::NotContainer {
                path: parents.join("."),
            });
        }
    }
    Ok(())
}

fn parse_index(segment: &str) -> Option<usize> {
    segment.parse::<usize>().ok()
}

fn bad_index(parents: &[&str], segment: &str, len: usize) -> PathError {
    PathError::BadIndex {
        path: parents.join("."),
        segment: segment.to_string(),
        len,
    }
}
