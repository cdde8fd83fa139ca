//! Walker for plainly nested objects with no type markers (`flat`).
//!
//! Leaves are inferred purely from value shape: primitives, primitive
//! lists, and objects matching a known value shape (`{value, unit}`,
//! `{hex, ...}`, `{r, g, b, ...}`, shadow shapes). Shape-matched objects
//! are leaves even though they are JSON objects; descending into a
//! color's `r`/`g`/`b` fields would fabricate child tokens.

use serde_json::{Map, Value};

use super::{RawLeaf, Walk};
use crate::infer::is_value_shape;

enum Node<'a> {
    Leaf(&'a Value),
    Container(&'a Map<String, Value>),
}

fn classify(node: &Value) -> Node<'_> {
    match node {
        Value::Object(map) if !is_value_shape(map) => Node::Container(map),
        other => Node::Leaf(other),
    }
}

pub(super) fn walk(root: &Value, out: &mut Walk) {
    let Some(map) = root.as_object() else { return };
    for (key, child) in map {
        walk_node(key.clone(), child, out);
    }
}

fn walk_node(path: String, node: &Value, out: &mut Walk) {
    match classify(node) {
        Node::Leaf(value) => {
            if value.is_null() {
                out.skip(&path, "has a null value");
                return;
            }
            out.leaves.push(RawLeaf {
                path,
                value: value.clone(),
                hint: None,
                metadata: None,
            });
        }
        Node::Container(children) => {
            if children.is_empty() {
                out.skip(&path, "is an empty object");
                return;
            }
            for (key, child) in children {
                walk_node(format!("{}/{}", path, key), child, out);
            }
        }
    }
}
