//! Walker for `collections[].modes[].variables[]` exports
//! (`style-dictionary`).
//!
//! Variable names are already slash-delimited paths. Collection and mode
//! names ride along as metadata so multi-mode exports (light/dark) stay
//! attributable after normalization. COLOR-typed variables carry Figma's
//! 0–1 float RGBA objects, which the color normalizer's float path
//! handles.

use serde_json::Value;

use super::{RawLeaf, Walk};
use crate::token::TokenMetadata;

pub(super) fn walk(root: &Value, out: &mut Walk) {
    let Some(collections) = find_collections(root) else {
        return;
    };

    for collection in collections {
        let collection_name = collection.get("name").and_then(Value::as_str);
        let Some(modes) = collection.get("modes").and_then(Value::as_array) else {
            continue;
        };
        for mode in modes {
            let mode_name = mode.get("name").and_then(Value::as_str);
            let Some(variables) = mode.get("variables").and_then(Value::as_array) else {
                continue;
            };
            for variable in variables {
                emit_variable(variable, collection_name, mode_name, out);
            }
        }
    }
}

/// The collections array sits at the top level or one level deep,
/// mirroring the format detector's probe.
fn find_collections(root: &Value) -> Option<&Vec<Value>> {
    let map = root.as_object()?;
    if let Some(collections) = map.get("collections").and_then(Value::as_array) {
        return Some(collections);
    }
    map.values()
        .find_map(|child| child.get("collections").and_then(Value::as_array))
}

fn emit_variable(
    variable: &Value,
    collection: Option<&str>,
    mode: Option<&str>,
    out: &mut Walk,
) {
    let Some(name) = variable.get("name").and_then(Value::as_str) else {
        out.warnings
            .push("variable without a name; skipped".to_string());
        return;
    };
    let value = variable.get("value").cloned().unwrap_or(Value::Null);
    if value.is_null() {
        out.skip(name, "has a null value");
        return;
    }

    let metadata = TokenMetadata {
        collection: collection.map(str::to_owned),
        mode: mode.map(str::to_owned),
        ..Default::default()
    };
    out.leaves.push(RawLeaf {
        path: name.to_owned(),
        value,
        hint: variable
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned),
        metadata: (!metadata.is_empty()).then_some(metadata),
    });
}
