//! SCSS variable generation.

use std::fmt::Write;

use tokenloom::Token;

use crate::css::render_value;

/// Renders tokens as SCSS variable assignments, one per line.
///
/// Names are derived from the token's CSS variable minus its `--` prefix,
/// so both exports stay aligned: `--color-primary-500` and
/// `$color-primary-500` always refer to the same token.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokenloom::parse_tokens;
/// use tokenloom_export::to_scss_variables;
///
/// let result = parse_tokens(&json!({ "spacing": { "md": "16px" } }));
/// assert_eq!(to_scss_variables(&result.tokens), "$spacing-md: 16px;\n");
/// ```
pub fn to_scss_variables(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let name = token.css_variable.trim_start_matches('-');
        let _ = writeln!(out, "${}: {};", name, render_value(token));
    }
    out
}
