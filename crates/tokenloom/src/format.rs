//! Input schema detection.
//!
//! Classifies a whole document into one of the known token export schemas
//! before any traversal happens. The rules are checked in order and the
//! first match wins; detection has no side effects and only selects which
//! walker runs next.

use serde_json::{Map, Value};

use crate::token::TokenFormat;

/// Classifies a raw JSON document.
///
/// Rules, in order:
///
/// 1. not a non-empty object → [`TokenFormat::Unknown`]
/// 2. a `collections[].modes[].variables[]` chain at the top level or one
///    level deep → [`TokenFormat::StyleDictionary`]
/// 3. any object anywhere carrying both `$type` and `$value` →
///    [`TokenFormat::FigmaVariables`] (DTCG)
/// 4. every top-level terminal value is a primitive (or a primitive list)
///    → [`TokenFormat::Flat`]
/// 5. otherwise → [`TokenFormat::Unknown`]
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokenloom::format::detect_format;
/// use tokenloom::TokenFormat;
///
/// assert_eq!(detect_format(&json!(null)), TokenFormat::Unknown);
/// assert_eq!(detect_format(&json!({})), TokenFormat::Unknown);
/// assert_eq!(
///     detect_format(&json!({ "brand": { "$type": "color", "$value": "#fff" } })),
///     TokenFormat::FigmaVariables
/// );
/// ```
pub fn detect_format(value: &Value) -> TokenFormat {
    let Some(map) = value.as_object() else {
        return TokenFormat::Unknown;
    };
    if map.is_empty() {
        return TokenFormat::Unknown;
    }

    let nested_collections = map
        .values()
        .filter_map(Value::as_object)
        .any(has_collections_chain);
    if has_collections_chain(map) || nested_collections {
        return TokenFormat::StyleDictionary;
    }

    if contains_dtcg_leaf(value) {
        return TokenFormat::FigmaVariables;
    }

    if map.values().all(is_flat_branch) {
        return TokenFormat::Flat;
    }

    TokenFormat::Unknown
}

/// True when the map carries a `collections` array whose entries have a
/// `modes` array whose entries have a `variables` array.
fn has_collections_chain(map: &Map<String, Value>) -> bool {
    let Some(collections) = map.get("collections").and_then(Value::as_array) else {
        return false;
    };
    collections.iter().any(|collection| {
        collection
            .get("modes")
            .and_then(Value::as_array)
            .map_or(false, |modes| {
                modes
                    .iter()
                    .any(|mode| mode.get("variables").map_or(false, Value::is_array))
            })
    })
}

/// Depth-first scan for any object carrying both `$type` and `$value`.
fn contains_dtcg_leaf(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            if map.contains_key("$type") && map.contains_key("$value") {
                return true;
            }
            map.values().any(contains_dtcg_leaf)
        }
        Value::Array(seq) => seq.iter().any(contains_dtcg_leaf),
        _ => false,
    }
}

/// Shallow plausibility check for the flat schema: a top-level branch is
/// either a nested object (not descended into here), a primitive, or a
/// list of primitives.
fn is_flat_branch(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(seq) => seq.iter().all(|item| !item.is_object() && !item.is_array()),
        _ => true,
    }
}
