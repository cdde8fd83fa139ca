//! Top-level parse entry points and result aggregation.
//!
//! One call = one pass: detect the format, run the matching walker, then
//! classify each extracted leaf into a canonical [`Token`]. The module
//! holds no state between calls, so concurrent parses need no locking.
//!
//! Malformed *input data* never raises: whole-document failures land in
//! `ParseResult.errors`, per-leaf failures in `ParseResult.warnings`.

use std::collections::{BTreeMap, HashSet};

use serde_json::Value;

use crate::category::detect_category;
use crate::color::{convert_color, ColorValue};
use crate::css::css_variable_name;
use crate::format::detect_format;
use crate::infer::infer_kind;
use crate::token::{
    DimensionValue, ParseMetadata, ParseResult, ShadowLayer, ShadowValue, Token,
    TokenCategory, TokenFormat, TokenKind, TokenValue,
};
use crate::walker::{walk, RawLeaf};

/// Options for a parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Extra leading segment for synthesized CSS variables, e.g. a theme
    /// slug so `Color/Primary` becomes `--acme-color-primary`.
    pub variable_prefix: Option<String>,
}

/// Parses an already-deserialized token document with default options.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokenloom::{parse_tokens, TokenCategory};
///
/// let document = json!({
///     "Color": { "Primary": { "500": { "$type": "color", "$value": { "hex": "#657e79" } } } }
/// });
/// let result = parse_tokens(&document);
///
/// assert!(result.errors.is_empty());
/// assert_eq!(result.tokens[0].css_variable, "--color-primary-500");
/// assert_eq!(result.tokens[0].category, TokenCategory::Color);
/// ```
pub fn parse_tokens(raw: &Value) -> ParseResult {
    parse_tokens_with_options(raw, &ParseOptions::default())
}

/// Parses an already-deserialized token document.
pub fn parse_tokens_with_options(raw: &Value, options: &ParseOptions) -> ParseResult {
    let format = detect_format(raw);
    if format == TokenFormat::Unknown {
        return unrecognized_result("unrecognized token format");
    }

    let walked = walk(format, raw);
    let mut aggregator = Aggregator::new(format, walked.warnings);
    for leaf in walked.leaves {
        aggregator.push(leaf, options);
    }
    aggregator.finish()
}

/// Parses a raw JSON text, e.g. the contents of an uploaded export file.
///
/// A document that is not valid JSON yields an `errors` entry with the
/// `unknown` format rather than an `Err`; data quality problems never
/// propagate as failures.
pub fn parse_token_file(raw: &str) -> ParseResult {
    parse_token_file_with_options(raw, &ParseOptions::default())
}

/// Parses a raw JSON text with options.
pub fn parse_token_file_with_options(raw: &str, options: &ParseOptions) -> ParseResult {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => parse_tokens_with_options(&value, options),
        Err(err) => unrecognized_result(&format!("invalid JSON: {}", err)),
    }
}

fn unrecognized_result(error: &str) -> ParseResult {
    ParseResult {
        tokens: Vec::new(),
        errors: vec![error.to_string()],
        warnings: Vec::new(),
        metadata: ParseMetadata {
            format: TokenFormat::Unknown,
            total_parsed: 0,
            categories: BTreeMap::new(),
        },
    }
}

/// Accumulates tokens, warnings, and category counts over one parse run.
struct Aggregator {
    format: TokenFormat,
    tokens: Vec<Token>,
    warnings: Vec<String>,
    categories: BTreeMap<TokenCategory, usize>,
    seen_paths: HashSet<String>,
    seen_variables: HashSet<String>,
}

impl Aggregator {
    fn new(format: TokenFormat, walker_warnings: Vec<String>) -> Self {
        Aggregator {
            format,
            tokens: Vec::new(),
            warnings: walker_warnings,
            categories: BTreeMap::new(),
            seen_paths: HashSet::new(),
            seen_variables: HashSet::new(),
        }
    }

    fn push(&mut self, leaf: RawLeaf, options: &ParseOptions) {
        // Paths are unique within one result. Duplicates can only come
        // from multi-mode exports reusing variable names; keeping the
        // first occurrence is deterministic.
        if !self.seen_paths.insert(leaf.path.clone()) {
            self.warnings.push(format!(
                "duplicate token path '{}'; keeping the first occurrence",
                leaf.path
            ));
            return;
        }

        let kind = infer_kind(&leaf.value, leaf.hint.as_deref());
        let value = match build_value(kind, &leaf.value) {
            Ok(value) => value,
            // Colors degrade to the unset sentinel so the token stays
            // editable; any other kind failure skips the leaf.
            Err(reason) if kind == TokenKind::Color => {
                self.warnings.push(format!(
                    "token '{}': {}; emitted without a value",
                    leaf.path, reason
                ));
                TokenValue::Color(ColorValue::unset())
            }
            Err(reason) => {
                self.warnings
                    .push(format!("token '{}' {}; skipped", leaf.path, reason));
                return;
            }
        };

        let category = detect_category(&leaf.path);
        if category == TokenCategory::Other {
            self.warnings.push(format!(
                "token '{}' did not match a known category",
                leaf.path
            ));
        }

        let css_variable = match &options.variable_prefix {
            Some(prefix) => css_variable_name(&format!("{}/{}", prefix, leaf.path)),
            None => css_variable_name(&leaf.path),
        };
        if !self.seen_variables.insert(css_variable.clone()) {
            self.warnings.push(format!(
                "css variable '{}' is also synthesized by an earlier token; keeping both",
                css_variable
            ));
        }

        let name = leaf
            .path
            .rsplit('/')
            .next()
            .unwrap_or(leaf.path.as_str())
            .to_string();

        *self.categories.entry(category).or_insert(0) += 1;
        self.tokens.push(Token {
            path: leaf.path,
            name,
            category,
            kind,
            value,
            css_variable,
            metadata: leaf.metadata,
        });
    }

    fn finish(self) -> ParseResult {
        ParseResult {
            metadata: ParseMetadata {
                format: self.format,
                total_parsed: self.tokens.len(),
                categories: self.categories,
            },
            tokens: self.tokens,
            errors: Vec::new(),
            warnings: self.warnings,
        }
    }
}

/// Builds the typed payload for an already-inferred kind.
fn build_value(kind: TokenKind, raw: &Value) -> Result<TokenValue, String> {
    match kind {
        TokenKind::Color => convert_color(raw).map(TokenValue::Color),
        TokenKind::Dimension => build_quantity(raw, "px").map(TokenValue::Dimension),
        TokenKind::Duration => build_quantity(raw, "ms").map(TokenValue::Dimension),
        TokenKind::Number => raw
            .as_f64()
            .map(TokenValue::Number)
            .ok_or_else(|| format!("has a non-numeric value: {}", raw)),
        TokenKind::Boolean => raw
            .as_bool()
            .map(TokenValue::Boolean)
            .ok_or_else(|| format!("has a non-boolean value: {}", raw)),
        TokenKind::FontFamily => build_font_family(raw).map(TokenValue::FontFamily),
        TokenKind::Shadow => build_shadow(raw).map(TokenValue::Shadow),
        TokenKind::String => Ok(TokenValue::Text(stringify(raw))),
    }
}

/// Parses a `{value, unit}` payload from either a unit-suffixed string
/// (`"16px"`, `"300ms"`) or an object form. Bare numbers take the
/// kind's default unit.
fn build_quantity(raw: &Value, default_unit: &str) -> Result<DimensionValue, String> {
    match raw {
        Value::String(s) => split_quantity(s.trim())
            .ok_or_else(|| format!("has an unparseable quantity: '{}'", s)),
        Value::Number(_) => Ok(DimensionValue {
            value: raw.as_f64().unwrap_or(0.0),
            unit: default_unit.to_string(),
        }),
        Value::Object(map) => {
            let value = map
                .get("value")
                .and_then(Value::as_f64)
                .ok_or("is missing a numeric 'value' field")?;
            let unit = map
                .get("unit")
                .and_then(Value::as_str)
                .unwrap_or(default_unit)
                .to_string();
            Ok(DimensionValue { value, unit })
        }
        other => Err(format!("has an unrecognized quantity shape: {}", other)),
    }
}

/// Splits `"16px"` into `(16.0, "px")`. The unit is the trailing
/// non-numeric run; the prefix must parse as a number.
fn split_quantity(s: &str) -> Option<DimensionValue> {
    let unit_start = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.' && *c != '-' && *c != '+')
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let value = s[..unit_start].parse::<f64>().ok()?;
    let unit = s[unit_start..].trim().to_string();
    Some(DimensionValue { value, unit })
}

/// A font stack: an array of names, or one comma-separated string.
fn build_font_family(raw: &Value) -> Result<Vec<String>, String> {
    match raw {
        Value::Array(seq) => {
            let names: Vec<String> = seq
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect();
            if names.is_empty() {
                Err("has an empty font stack".to_string())
            } else {
                Ok(names)
            }
        }
        Value::String(s) => Ok(s.split(',').map(|name| name.trim().to_string()).collect()),
        other => Err(format!("has an unrecognized font stack shape: {}", other)),
    }
}

fn build_shadow(raw: &Value) -> Result<ShadowValue, String> {
    let map = raw
        .as_object()
        .ok_or_else(|| format!("has an unrecognized shadow shape: {}", raw))?;

    let layers: Vec<ShadowLayer> = match map.get("shadows").and_then(Value::as_array) {
        Some(list) => list.iter().filter_map(build_shadow_layer).collect(),
        None => build_shadow_layer(raw).into_iter().collect(),
    };
    if layers.is_empty() {
        return Err("has no parseable shadow layers".to_string());
    }
    Ok(ShadowValue { shadows: layers })
}

fn build_shadow_layer(raw: &Value) -> Option<ShadowLayer> {
    let map = raw.as_object()?;
    let number = |key: &str| map.get(key).and_then(Value::as_f64).unwrap_or(0.0);

    // The layer color may itself be any color shape; normalize to hex.
    let color = match map.get("color") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => convert_color(other).ok()?.hex,
        None => "#000000".to_string(),
    };

    Some(ShadowLayer {
        x: number("x"),
        y: number("y"),
        blur: number("blur"),
        spread: number("spread"),
        color,
        inset: map.get("inset").and_then(Value::as_bool),
    })
}

/// Fallback string rendering for the catch-all kind.
fn stringify(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // Entry points and short-circuits
    // =========================================================================

    #[test]
    fn test_unknown_format_short_circuits() {
        for document in [json!(null), json!("x"), json!({}), json!([1])] {
            let result = parse_tokens(&document);
            assert!(result.tokens.is_empty());
            assert_eq!(result.errors, vec!["unrecognized token format"]);
            assert_eq!(result.metadata.format, TokenFormat::Unknown);
            assert_eq!(result.metadata.total_parsed, 0);
        }
    }

    #[test]
    fn test_parse_token_file_accepts_json_text() {
        let result = parse_token_file(r#"{ "spacing": { "md": "16px" } }"#);
        assert!(result.errors.is_empty());
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.metadata.format, TokenFormat::Flat);
    }

    #[test]
    fn test_parse_token_file_reports_invalid_json() {
        let result = parse_token_file("{ not json");
        assert!(result.tokens.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("invalid JSON"));
        assert_eq!(result.metadata.format, TokenFormat::Unknown);
    }

    // =========================================================================
    // Aggregation behavior
    // =========================================================================

    #[test]
    fn test_duplicate_paths_keep_first() {
        let document = json!({
            "collections": [{
                "name": "Theme",
                "modes": [
                    { "name": "light",
                      "variables": [{ "name": "color/bg", "type": "COLOR",
                                      "value": { "r": 1.0, "g": 1.0, "b": 1.0 } }] },
                    { "name": "dark",
                      "variables": [{ "name": "color/bg", "type": "COLOR",
                                      "value": { "r": 0.0, "g": 0.0, "b": 0.0 } }] }
                ]
            }]
        });
        let result = parse_tokens(&document);
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].metadata.as_ref().unwrap().mode.as_deref(), Some("light"));
        assert!(result
            .warnings
            .iter()
            .any(|warning| warning.contains("duplicate token path 'color/bg'")));
    }

    #[test]
    fn test_css_variable_collision_keeps_both() {
        // Distinct paths, same synthesized variable.
        let document = json!({
            "spacing": { "md": "16px", "md!": "24px" }
        });
        let result = parse_tokens(&document);
        assert_eq!(result.tokens.len(), 2);
        assert_eq!(result.tokens[0].css_variable, "--spacing-md");
        assert_eq!(result.tokens[1].css_variable, "--spacing-md");
        assert!(result
            .warnings
            .iter()
            .any(|warning| warning.contains("'--spacing-md'")));
    }

    #[test]
    fn test_other_category_records_a_warning() {
        let result = parse_tokens(&json!({ "opacity": { "overlay": 0.5 } }));
        assert_eq!(result.tokens[0].category, TokenCategory::Other);
        assert!(result
            .warnings
            .iter()
            .any(|warning| warning.contains("did not match a known category")));
    }

    #[test]
    fn test_unparseable_color_emits_sentinel() {
        let document = json!({
            "color": { "broken": { "hex": "#zz" } }
        });
        let result = parse_tokens(&document);
        assert_eq!(result.tokens.len(), 1);
        match &result.tokens[0].value {
            TokenValue::Color(color) => assert!(color.is_unset()),
            other => panic!("expected color value, got {:?}", other),
        }
        assert!(result
            .warnings
            .iter()
            .any(|warning| warning.contains("emitted without a value")));
    }

    #[test]
    fn test_variable_prefix_option() {
        let options = ParseOptions {
            variable_prefix: Some("acme".to_string()),
        };
        let result =
            parse_tokens_with_options(&json!({ "spacing": { "md": "16px" } }), &options);
        assert_eq!(result.tokens[0].css_variable, "--acme-spacing-md");
    }

    // =========================================================================
    // Payload builders
    // =========================================================================

    #[test]
    fn test_build_quantity_from_string() {
        let quantity = build_quantity(&json!("1.5rem"), "px").unwrap();
        assert_eq!(quantity.value, 1.5);
        assert_eq!(quantity.unit, "rem");
    }

    #[test]
    fn test_build_quantity_from_bare_number() {
        let quantity = build_quantity(&json!(16), "px").unwrap();
        assert_eq!(quantity.value, 16.0);
        assert_eq!(quantity.unit, "px");
    }

    #[test]
    fn test_build_quantity_from_object() {
        let quantity = build_quantity(&json!({ "value": 300, "unit": "ms" }), "ms").unwrap();
        assert_eq!(quantity.value, 300.0);
        assert_eq!(quantity.unit, "ms");
    }

    #[test]
    fn test_build_quantity_negative_value() {
        let quantity = build_quantity(&json!("-4px"), "px").unwrap();
        assert_eq!(quantity.value, -4.0);
        assert_eq!(quantity.unit, "px");
    }

    #[test]
    fn test_build_font_family_from_string() {
        let stack = build_font_family(&json!("Inter, sans-serif")).unwrap();
        assert_eq!(stack, vec!["Inter", "sans-serif"]);
    }

    #[test]
    fn test_build_shadow_single_layer() {
        let shadow = build_shadow(&json!({
            "x": 0, "y": 2, "blur": 4, "color": "#000000"
        }))
        .unwrap();
        assert_eq!(shadow.shadows.len(), 1);
        assert_eq!(shadow.shadows[0].y, 2.0);
        assert_eq!(shadow.shadows[0].spread, 0.0);
        assert_eq!(shadow.shadows[0].color, "#000000");
    }

    #[test]
    fn test_build_shadow_layer_list() {
        let shadow = build_shadow(&json!({
            "shadows": [
                { "x": 0, "y": 1, "blur": 2, "color": "#00000040" },
                { "x": 0, "y": 4, "blur": 8, "spread": -2,
                  "color": { "r": 0, "g": 0, "b": 0 }, "inset": true }
            ]
        }))
        .unwrap();
        assert_eq!(shadow.shadows.len(), 2);
        assert_eq!(shadow.shadows[1].color, "#000000");
        assert_eq!(shadow.shadows[1].inset, Some(true));
    }

    #[test]
    fn test_stringify_non_strings() {
        assert_eq!(stringify(&json!("plain")), "plain");
        assert_eq!(stringify(&json!([1, 2])), "[1,2]");
    }
}
