//! Nested JSON re-export.
//!
//! Re-nests the flat token list by path segments into a plain object
//! tree, with each leaf holding the token's typed payload. Useful as a
//! portable snapshot and as input to other token tooling.

use serde_json::{Map, Value};
use tokenloom::Token;

use crate::error::ExportError;

/// Renders tokens as pretty-printed nested JSON keyed by path segments.
///
/// When a token's path collides with an ancestor of another token
/// (`a/b` and `a/b/c`), the later token wins; the parser warns about
/// such documents upstream.
pub fn to_nested_json(tokens: &[Token]) -> Result<String, ExportError> {
    if tokens.is_empty() {
        return Err(ExportError::EmptyTokenSet);
    }

    let mut root = Map::new();
    for token in tokens {
        let mut node = &mut root;
        let mut segments = token.path.split('/').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                node.insert(segment.to_string(), serde_json::to_value(&token.value)?);
            } else {
                let child = node
                    .entry(segment.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !child.is_object() {
                    // A shorter path already emitted a leaf here; the
                    // deeper token takes over the slot.
                    *child = Value::Object(Map::new());
                }
                let Value::Object(map) = child else { break };
                node = map;
            }
        }
    }

    let mut text = serde_json::to_string_pretty(&Value::Object(root))?;
    text.push('\n');
    Ok(text)
}
