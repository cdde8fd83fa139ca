//! Format-specific tree traversal.
//!
//! Each detected format gets its own walker. A walker performs a recursive
//! descent (JSON trees have no cycles, so plain recursion is enough) and
//! yields [`RawLeaf`] records in document order; classification of each
//! leaf into a canonical token happens later in the aggregator.
//!
//! A single malformed leaf (null value, unrecognized shape) is skipped
//! with a warning and traversal continues with its siblings.

mod dtcg;
mod flat;
mod style_dictionary;

use serde_json::Value;

use crate::token::{TokenFormat, TokenMetadata};

/// One extracted leaf before classification: the hierarchical path, the
/// raw value, an optional declared-type hint, and source metadata.
#[derive(Debug, Clone)]
pub(crate) struct RawLeaf {
    pub path: String,
    pub value: Value,
    pub hint: Option<String>,
    pub metadata: Option<TokenMetadata>,
}

/// Walker output: leaves in traversal order plus per-leaf warnings.
#[derive(Debug, Default)]
pub(crate) struct Walk {
    pub leaves: Vec<RawLeaf>,
    pub warnings: Vec<String>,
}

impl Walk {
    fn skip(&mut self, path: &str, reason: &str) {
        self.warnings.push(format!("token '{}' {}; skipped", path, reason));
    }
}

/// Runs the walker matching an already-detected format.
///
/// Callers must not pass [`TokenFormat::Unknown`]; the parse entry point
/// short-circuits before reaching this function.
pub(crate) fn walk(format: TokenFormat, root: &Value) -> Walk {
    let mut out = Walk::default();
    match format {
        TokenFormat::FigmaVariables => dtcg::walk(root, &mut out),
        TokenFormat::StyleDictionary => style_dictionary::walk(root, &mut out),
        TokenFormat::Flat => flat::walk(root, &mut out),
        TokenFormat::Unknown => {}
    }
    out
}
