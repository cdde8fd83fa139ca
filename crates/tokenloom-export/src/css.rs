//! CSS custom property generation.

use std::fmt::Write;

use tokenloom::{Token, TokenValue};

/// Renders tokens as a `:root` block of CSS custom properties, one
/// declaration per token, in token order.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokenloom::parse_tokens;
/// use tokenloom_export::to_css_variables;
///
/// let result = parse_tokens(&json!({ "spacing": { "md": "16px" } }));
/// let css = to_css_variables(&result.tokens);
/// assert_eq!(css, ":root {\n  --spacing-md: 16px;\n}\n");
/// ```
pub fn to_css_variables(tokens: &[Token]) -> String {
    let mut out = String::from(":root {\n");
    for token in tokens {
        // String length only grows; write! into a String cannot fail.
        let _ = writeln!(out, "  {}: {};", token.css_variable, render_value(token));
    }
    out.push_str("}\n");
    out
}

/// Renders one token's payload as a CSS value.
pub(crate) fn render_value(token: &Token) -> String {
    match &token.value {
        TokenValue::Color(color) => {
            if color.is_unset() {
                // "no value defined" sentinel; `initial` keeps the
                // declaration valid while opting out of the property.
                "initial".to_string()
            } else if color.opacity < 1.0 {
                format!(
                    "rgba({}, {}, {}, {})",
                    color.rgb.r,
                    color.rgb.g,
                    color.rgb.b,
                    format_number(color.opacity)
                )
            } else {
                color.hex.clone()
            }
        }
        TokenValue::Dimension(quantity) => {
            format!("{}{}", format_number(quantity.value), quantity.unit)
        }
        TokenValue::Shadow(shadow) => shadow
            .shadows
            .iter()
            .map(|layer| {
                let mut rendered = format!(
                    "{}px {}px {}px {}px {}",
                    format_number(layer.x),
                    format_number(layer.y),
                    format_number(layer.blur),
                    format_number(layer.spread),
                    layer.color
                );
                if layer.inset == Some(true) {
                    rendered.insert_str(0, "inset ");
                }
                rendered
            })
            .collect::<Vec<_>>()
            .join(", "),
        TokenValue::FontFamily(stack) => stack
            .iter()
            .map(|name| {
                if name.contains(char::is_whitespace) {
                    format!("\"{}\"", name)
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
        TokenValue::Number(n) => format_number(*n),
        TokenValue::Boolean(b) => b.to_string(),
        TokenValue::Text(s) => s.clone(),
    }
}

/// Renders a number without a trailing `.0` for whole values.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
