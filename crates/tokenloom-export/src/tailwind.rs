//! Tailwind config generation.
//!
//! Tokens are bucketed into `theme.extend` sections by category. Values
//! reference the synthesized CSS variables (`var(--...)`) rather than raw
//! values, so the Tailwind config stays in sync with the injected
//! variables without regeneration on every value edit.

use serde_json::{Map, Value};
use tokenloom::{Token, TokenCategory};

use crate::error::ExportError;

/// `theme.extend` section per category; `Other` tokens have no Tailwind
/// home and are skipped.
fn section(category: TokenCategory) -> Option<&'static str> {
    match category {
        TokenCategory::Color => Some("colors"),
        TokenCategory::Spacing => Some("spacing"),
        TokenCategory::Radius => Some("borderRadius"),
        TokenCategory::Shadow => Some("boxShadow"),
        TokenCategory::Typography => Some("fontFamily"),
        TokenCategory::Grid => Some("screens"),
        TokenCategory::Other => None,
    }
}

/// Renders a `module.exports` Tailwind config with one `theme.extend`
/// entry per bucketed token.
pub fn to_tailwind_config(tokens: &[Token]) -> Result<String, ExportError> {
    if tokens.is_empty() {
        return Err(ExportError::EmptyTokenSet);
    }

    let mut extend = Map::new();
    for token in tokens {
        let Some(section) = section(token.category) else {
            continue;
        };
        let bucket = extend
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(bucket) = bucket.as_object_mut() {
            let key = token
                .css_variable
                .trim_start_matches('-')
                .to_string();
            bucket.insert(key, Value::String(format!("var({})", token.css_variable)));
        }
    }

    let extend = serde_json::to_string_pretty(&Value::Object(extend))?;
    let indented = extend.replace('\n', "\n    ");
    Ok(format!(
        "module.exports = {{\n  theme: {{\n    extend: {}\n  }}\n}};\n",
        indented
    ))
}
