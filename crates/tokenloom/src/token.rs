//! Canonical token model.
//!
//! Every downstream consumer (persistence, CSS variable injection, export
//! generators) works from the types in this module. A [`Token`] is created
//! once during parsing and never mutated afterward; edits happen on copies
//! in the editor layer.
//!
//! The serialized shape uses `camelCase` field names (`cssVariable`,
//! `totalParsed`, `figmaId`) so a persisted token round-trips unchanged
//! through JSON-speaking backends.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::color::ColorValue;

/// Semantic bucket used to group tokens for editing and export.
///
/// A closed set: anything that does not match a known keyword resolves to
/// [`TokenCategory::Other`], never to a missing value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Shadow,
    Radius,
    Grid,
    Other,
}

impl TokenCategory {
    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Typography => "typography",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Radius => "radius",
            TokenCategory::Grid => "grid",
            TokenCategory::Other => "other",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical value type of a token.
///
/// Serialized as the token's `type` field. Defaults to
/// [`TokenKind::String`] when no heuristic matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    Dimension,
    Duration,
    Number,
    Boolean,
    FontFamily,
    Shadow,
    String,
}

impl TokenKind {
    /// Resolves a declared-type hint (a `$type` or `type` field from the
    /// source document) to a canonical kind.
    ///
    /// Matching is case-insensitive and tolerates the dash-separated DTCG
    /// spelling (`font-family` ≡ `fontFamily`). Unrecognized hints return
    /// `None` so shape-based inference can take over.
    pub fn from_hint(hint: &str) -> Option<Self> {
        let normalized: String = hint
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "color" => Some(TokenKind::Color),
            "dimension" => Some(TokenKind::Dimension),
            "duration" => Some(TokenKind::Duration),
            "number" => Some(TokenKind::Number),
            "boolean" => Some(TokenKind::Boolean),
            "fontfamily" => Some(TokenKind::FontFamily),
            "shadow" => Some(TokenKind::Shadow),
            "string" => Some(TokenKind::String),
            _ => None,
        }
    }

    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Dimension => "dimension",
            TokenKind::Duration => "duration",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::FontFamily => "fontFamily",
            TokenKind::Shadow => "shadow",
            TokenKind::String => "string",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{ value, unit }` payload for dimension and duration tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionValue {
    pub value: f64,
    pub unit: String,
}

/// One layer of a (possibly multi-layer) shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inset: Option<bool>,
}

/// Shadow payload: an ordered list of layers, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowValue {
    pub shadows: Vec<ShadowLayer>,
}

/// Typed token payload. The serialized shape depends on the token's kind,
/// so the union is untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Color(ColorValue),
    Dimension(DimensionValue),
    Shadow(ShadowValue),
    FontFamily(Vec<String>),
    Number(f64),
    Boolean(bool),
    Text(String),
}

/// Source-format metadata carried through uninterpreted.
///
/// The core never reads these fields back; they exist so re-export and
/// re-import round trips can correlate tokens with their source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TokenMetadata {
    /// True when no field carries a value; empty metadata is omitted from
    /// the token entirely.
    pub fn is_empty(&self) -> bool {
        self.figma_id.is_none()
            && self.collection.is_none()
            && self.mode.is_none()
            && self.description.is_none()
    }
}

/// One design decision, addressed by a hierarchical path and exposed as a
/// CSS custom property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Slash-delimited hierarchical name, unique within one [`ParseResult`].
    pub path: String,
    /// Last path segment, used as the human label.
    pub name: String,
    pub category: TokenCategory,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Synthesized `--kebab-case` identifier, derived purely from `path`.
    pub css_variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
}

/// The input schema a document was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenFormat {
    FigmaVariables,
    StyleDictionary,
    Flat,
    Unknown,
}

impl TokenFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenFormat::FigmaVariables => "figma-variables",
            TokenFormat::StyleDictionary => "style-dictionary",
            TokenFormat::Flat => "flat",
            TokenFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary metadata for one parse run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMetadata {
    pub format: TokenFormat,
    pub total_parsed: usize,
    /// Token count per category, in stable category order.
    pub categories: BTreeMap<TokenCategory, usize>,
}

/// Output of one `parse` call: tokens in document traversal order plus
/// accumulated diagnostics.
///
/// `errors` mean the whole document could not be classified; `warnings`
/// are per-leaf issues that did not abort parsing. The import wizard
/// blocks on errors and surfaces warnings for manual review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub metadata: ParseMetadata,
}
