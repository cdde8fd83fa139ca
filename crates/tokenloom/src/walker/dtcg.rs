//! Walker for DTCG-style exports (`figma-variables`).
//!
//! A node is a leaf iff it carries both `$type` and `$value`. Container
//! nodes contribute their key to the path and recursion continues into
//! their non-`$` children. `$description` and the Figma variable id from
//! `$extensions` ride along as metadata.

use serde_json::{Map, Value};

use super::{RawLeaf, Walk};
use crate::token::TokenMetadata;

/// Classified DTCG node; the kind decides recursion vs. emission.
enum Node<'a> {
    Leaf {
        value: &'a Value,
        hint: Option<&'a str>,
        metadata: Option<TokenMetadata>,
    },
    Container(&'a Map<String, Value>),
    /// A bare primitive under a container: not a token node in this schema.
    Foreign,
}

fn classify(node: &Value) -> Node<'_> {
    let Some(map) = node.as_object() else {
        return Node::Foreign;
    };
    if map.contains_key("$type") && map.contains_key("$value") {
        Node::Leaf {
            value: &map["$value"],
            hint: map.get("$type").and_then(Value::as_str),
            metadata: leaf_metadata(map),
        }
    } else {
        Node::Container(map)
    }
}

fn leaf_metadata(map: &Map<String, Value>) -> Option<TokenMetadata> {
    let description = map
        .get("$description")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let figma_id = map
        .get("$extensions")
        .and_then(Value::as_object)
        .and_then(|extensions| extensions.get("com.figma.variableId"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let metadata = TokenMetadata {
        figma_id,
        description,
        ..Default::default()
    };
    (!metadata.is_empty()).then_some(metadata)
}

pub(super) fn walk(root: &Value, out: &mut Walk) {
    let Some(map) = root.as_object() else { return };
    for (key, child) in map {
        if !key.starts_with('$') {
            walk_node(key.clone(), child, out);
        }
    }
}

fn walk_node(path: String, node: &Value, out: &mut Walk) {
    match classify(node) {
        Node::Leaf {
            value,
            hint,
            metadata,
        } => {
            if value.is_null() {
                out.skip(&path, "has a null $value");
                return;
            }
            out.leaves.push(RawLeaf {
                path,
                value: value.clone(),
                hint: hint.map(str::to_owned),
                metadata,
            });
        }
        Node::Container(children) => {
            for (key, child) in children {
                if !key.starts_with('$') {
                    walk_node(format!("{}/{}", path, key), child, out);
                }
            }
        }
        Node::Foreign => out.skip(&path, "is not a token node"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn walk_document(document: Value) -> Walk {
        let mut out = Walk::default();
        walk(&document, &mut out);
        out
    }

    #[test]
    fn test_nested_leaves_build_slash_paths() {
        let out = walk_document(json!({
            "Color": {
                "Primary": {
                    "500": { "$type": "color", "$value": "#657e79" }
                }
            },
            "Spacing": {
                "md": { "$type": "dimension", "$value": { "value": 16, "unit": "px" } }
            }
        }));
        assert!(out.warnings.is_empty());
        let paths: Vec<&str> = out.leaves.iter().map(|leaf| leaf.path.as_str()).collect();
        assert_eq!(paths, ["Color/Primary/500", "Spacing/md"]);
        assert_eq!(out.leaves[0].hint.as_deref(), Some("color"));
    }

    #[test]
    fn test_null_value_warns_and_continues() {
        let out = walk_document(json!({
            "broken": { "$type": "color", "$value": null },
            "ok": { "$type": "color", "$value": "#fff" }
        }));
        assert_eq!(out.leaves.len(), 1);
        assert_eq!(out.leaves[0].path, "ok");
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("broken"));
    }

    #[test]
    fn test_figma_extension_becomes_metadata() {
        let out = walk_document(json!({
            "brand": {
                "$type": "color",
                "$value": "#657e79",
                "$description": "Primary brand color",
                "$extensions": { "com.figma.variableId": "VariableID:1:23" }
            }
        }));
        let metadata = out.leaves[0].metadata.as_ref().unwrap();
        assert_eq!(metadata.figma_id.as_deref(), Some("VariableID:1:23"));
        assert_eq!(metadata.description.as_deref(), Some("Primary brand color"));
    }

    #[test]
    fn test_container_dollar_keys_are_ignored() {
        let out = walk_document(json!({
            "$schema": "https://example.com/tokens",
            "group": {
                "$description": "ignored on containers",
                "a": { "$type": "number", "$value": 1 }
            }
        }));
        assert_eq!(out.leaves.len(), 1);
        assert_eq!(out.leaves[0].path, "group/a");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_bare_primitive_warns() {
        let out = walk_document(json!({
            "group": { "loose": 42 }
        }));
        assert!(out.leaves.is_empty());
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("group/loose"));
    }
}
