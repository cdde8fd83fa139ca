//! Value type inference.
//!
//! A declared-type hint (`$type`/`type` from the source document) always
//! wins when recognized. Otherwise the raw value is classified by shape
//! against an ordered rule table evaluated top to bottom, so each rule's
//! contract is auditable and testable without running the full parser.
//! The table is total: the final fallback is [`TokenKind::String`], never
//! a failure.

use serde_json::{Map, Value};

use crate::token::TokenKind;

/// Units recognized in dimension strings like `16px` or `1.5rem`.
///
/// Longer units come first so `1rem` is not mis-split as `1r` + `em`.
const DIMENSION_UNITS: &[&str] = &["rem", "px", "em", "vh", "vw", "%"];

/// Shape rules, evaluated in order; the first matching predicate decides.
const SHAPE_RULES: &[(fn(&Value) -> bool, TokenKind)] = &[
    (is_color_string, TokenKind::Color),
    (is_dimension_string, TokenKind::Dimension),
    (is_duration_string, TokenKind::Duration),
    (is_number, TokenKind::Number),
    (is_boolean, TokenKind::Boolean),
    (is_font_family_list, TokenKind::FontFamily),
    (is_shadow_shape, TokenKind::Shadow),
    (is_color_shape, TokenKind::Color),
    (is_dimension_shape, TokenKind::Dimension),
];

/// Resolves the canonical kind of a raw leaf value.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokenloom::infer::infer_kind;
/// use tokenloom::TokenKind;
///
/// assert_eq!(infer_kind(&json!("#657e79"), None), TokenKind::Color);
/// assert_eq!(infer_kind(&json!("16px"), None), TokenKind::Dimension);
/// assert_eq!(infer_kind(&json!("anything"), Some("COLOR")), TokenKind::Color);
/// ```
pub fn infer_kind(value: &Value, hint: Option<&str>) -> TokenKind {
    if let Some(kind) = hint.and_then(TokenKind::from_hint) {
        return kind;
    }
    for (predicate, kind) in SHAPE_RULES {
        if predicate(value) {
            return *kind;
        }
    }
    TokenKind::String
}

fn is_color_string(value: &Value) -> bool {
    let Some(s) = value.as_str() else { return false };
    let s = s.trim();
    is_hex_color(s)
        || is_function_call(s, "rgb")
        || is_function_call(s, "rgba")
        || is_function_call(s, "hsl")
        || is_function_call(s, "hsla")
}

/// `#rgb`, `#rrggbb`, or `#rrggbbaa`.
fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else { return false };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_function_call(s: &str, name: &str) -> bool {
    s.strip_prefix(name)
        .and_then(|rest| rest.trim_start().strip_prefix('('))
        .map_or(false, |_| s.ends_with(')'))
}

fn is_dimension_string(value: &Value) -> bool {
    let Some(s) = value.as_str() else { return false };
    let s = s.trim();
    DIMENSION_UNITS
        .iter()
        .any(|unit| number_with_suffix(s, unit))
}

/// `<number>ms` or `<number>s`.
fn is_duration_string(value: &Value) -> bool {
    let Some(s) = value.as_str() else { return false };
    let s = s.trim();
    number_with_suffix(s, "ms") || number_with_suffix(s, "s")
}

fn number_with_suffix(s: &str, suffix: &str) -> bool {
    s.strip_suffix(suffix)
        .map_or(false, |n| !n.is_empty() && n.trim().parse::<f64>().is_ok())
}

fn is_number(value: &Value) -> bool {
    value.is_number()
}

fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// A non-empty array of strings is a font stack.
fn is_font_family_list(value: &Value) -> bool {
    value
        .as_array()
        .map_or(false, |seq| !seq.is_empty() && seq.iter().all(Value::is_string))
}

/// Objects carrying a `shadows` list, or a single `blur`+`color` layer.
fn is_shadow_shape(value: &Value) -> bool {
    value.as_object().map_or(false, shadow_shaped)
}

/// Objects carrying `hex`, full `r`/`g`/`b` channels, or a `components`
/// list.
fn is_color_shape(value: &Value) -> bool {
    value.as_object().map_or(false, color_shaped)
}

/// `{value, unit}` objects.
fn is_dimension_shape(value: &Value) -> bool {
    value.as_object().map_or(false, dimension_shaped)
}

fn shadow_shaped(map: &Map<String, Value>) -> bool {
    map.get("shadows").map_or(false, Value::is_array)
        || (map.contains_key("blur") && map.contains_key("color"))
}

fn color_shaped(map: &Map<String, Value>) -> bool {
    map.contains_key("hex")
        || (map.contains_key("r") && map.contains_key("g") && map.contains_key("b"))
        || map.get("components").map_or(false, Value::is_array)
}

fn dimension_shaped(map: &Map<String, Value>) -> bool {
    map.contains_key("value") && map.contains_key("unit")
}

/// True when a map matches any known leaf value shape. The flat walker
/// treats these objects as leaves instead of descending into their fields
/// as if they were child tokens.
pub(crate) fn is_value_shape(map: &Map<String, Value>) -> bool {
    shadow_shaped(map) || color_shaped(map) || dimension_shaped(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // Hint resolution
    // =========================================================================

    #[test]
    fn test_recognized_hint_wins_over_shape() {
        // The value alone would classify as dimension; the hint overrides.
        assert_eq!(infer_kind(&json!("16px"), Some("duration")), TokenKind::Duration);
        assert_eq!(infer_kind(&json!({}), Some("shadow")), TokenKind::Shadow);
    }

    #[test]
    fn test_unrecognized_hint_falls_through_to_shape() {
        assert_eq!(infer_kind(&json!(1.5), Some("FLOAT")), TokenKind::Number);
        assert_eq!(infer_kind(&json!("#fff"), Some("paint")), TokenKind::Color);
    }

    // =========================================================================
    // String shapes
    // =========================================================================

    #[test]
    fn test_color_strings() {
        assert_eq!(infer_kind(&json!("#fff"), None), TokenKind::Color);
        assert_eq!(infer_kind(&json!("#657e79"), None), TokenKind::Color);
        assert_eq!(infer_kind(&json!("#657e79cc"), None), TokenKind::Color);
        assert_eq!(infer_kind(&json!("rgb(1, 2, 3)"), None), TokenKind::Color);
        assert_eq!(infer_kind(&json!("rgba(1, 2, 3, 0.5)"), None), TokenKind::Color);
        assert_eq!(infer_kind(&json!("hsl(210, 40%, 30%)"), None), TokenKind::Color);
        assert_eq!(infer_kind(&json!("hsla(210, 40%, 30%, 1)"), None), TokenKind::Color);
    }

    #[test]
    fn test_non_color_strings() {
        assert_eq!(infer_kind(&json!("#ffff"), None), TokenKind::String);
        assert_eq!(infer_kind(&json!("rgb"), None), TokenKind::String);
        assert_eq!(infer_kind(&json!("Inter"), None), TokenKind::String);
    }

    #[test]
    fn test_dimension_strings() {
        assert_eq!(infer_kind(&json!("16px"), None), TokenKind::Dimension);
        assert_eq!(infer_kind(&json!("1.5rem"), None), TokenKind::Dimension);
        assert_eq!(infer_kind(&json!("0.25em"), None), TokenKind::Dimension);
        assert_eq!(infer_kind(&json!("100%"), None), TokenKind::Dimension);
        assert_eq!(infer_kind(&json!("50vh"), None), TokenKind::Dimension);
        assert_eq!(infer_kind(&json!("75vw"), None), TokenKind::Dimension);
    }

    #[test]
    fn test_duration_strings() {
        assert_eq!(infer_kind(&json!("300ms"), None), TokenKind::Duration);
        assert_eq!(infer_kind(&json!("2s"), None), TokenKind::Duration);
        assert_eq!(infer_kind(&json!("0.25s"), None), TokenKind::Duration);
    }

    #[test]
    fn test_suffix_without_number_is_string() {
        assert_eq!(infer_kind(&json!("px"), None), TokenKind::String);
        assert_eq!(infer_kind(&json!("canvas"), None), TokenKind::String);
        assert_eq!(infer_kind(&json!("ms"), None), TokenKind::String);
    }

    // =========================================================================
    // Primitive and array shapes
    // =========================================================================

    #[test]
    fn test_primitives() {
        assert_eq!(infer_kind(&json!(16), None), TokenKind::Number);
        assert_eq!(infer_kind(&json!(1.5), None), TokenKind::Number);
        assert_eq!(infer_kind(&json!(true), None), TokenKind::Boolean);
    }

    #[test]
    fn test_font_family_list() {
        assert_eq!(
            infer_kind(&json!(["Inter", "sans-serif"]), None),
            TokenKind::FontFamily
        );
        // Mixed or empty arrays are not font stacks.
        assert_eq!(infer_kind(&json!([]), None), TokenKind::String);
        assert_eq!(infer_kind(&json!(["Inter", 12]), None), TokenKind::String);
    }

    // =========================================================================
    // Object shapes
    // =========================================================================

    #[test]
    fn test_shadow_shapes() {
        assert_eq!(
            infer_kind(&json!({ "shadows": [{ "blur": 4 }] }), None),
            TokenKind::Shadow
        );
        assert_eq!(
            infer_kind(&json!({ "blur": 4, "color": "#000" }), None),
            TokenKind::Shadow
        );
    }

    #[test]
    fn test_color_shapes() {
        assert_eq!(infer_kind(&json!({ "hex": "#657e79" }), None), TokenKind::Color);
        assert_eq!(
            infer_kind(&json!({ "r": 0.5, "g": 0.5, "b": 0.5 }), None),
            TokenKind::Color
        );
        assert_eq!(
            infer_kind(&json!({ "components": [1, 0, 0] }), None),
            TokenKind::Color
        );
    }

    #[test]
    fn test_dimension_shape() {
        assert_eq!(
            infer_kind(&json!({ "value": 16, "unit": "px" }), None),
            TokenKind::Dimension
        );
    }

    #[test]
    fn test_shadow_beats_color_shape() {
        // A shadow layer also carries a "color" field; the shadow rule is
        // ordered first so it wins.
        let value = json!({ "blur": 4, "color": "#000", "hex": "#000000" });
        assert_eq!(infer_kind(&value, None), TokenKind::Shadow);
    }

    #[test]
    fn test_fallback_is_string() {
        assert_eq!(infer_kind(&json!("plain text"), None), TokenKind::String);
        assert_eq!(infer_kind(&json!({ "anything": 1 }), None), TokenKind::String);
        assert_eq!(infer_kind(&json!(null), None), TokenKind::String);
    }
}
