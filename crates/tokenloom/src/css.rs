//! CSS custom property name synthesis.
//!
//! Every token exposes a `--kebab-case` identifier derived purely from its
//! path. The derivation must be deterministic and idempotent: re-parsing
//! the same export has to reproduce the same variable names, otherwise a
//! re-import would spuriously rename every variable downstream.

use deunicode::deunicode;

/// Derives a CSS custom property name from a slash-delimited token path.
///
/// Steps: transliterate to ASCII, lowercase, map `/`, `.`, `_`, and
/// whitespace to `-`, drop anything outside `[a-z0-9-]`, collapse repeated
/// hyphens, trim edge hyphens, prefix with `--`. Paths with no usable
/// characters fall back to `--token` so the result always matches
/// `^--[a-z0-9-]+$`.
///
/// # Example
///
/// ```rust
/// use tokenloom::css::css_variable_name;
///
/// assert_eq!(css_variable_name("Color/Primary/500"), "--color-primary-500");
/// assert_eq!(css_variable_name("spacing.md"), "--spacing-md");
/// assert_eq!(css_variable_name("Grid / Breakpoint xl"), "--grid-breakpoint-xl");
/// ```
pub fn css_variable_name(path: &str) -> String {
    let ascii = deunicode(path).to_lowercase();

    let mut name = String::with_capacity(ascii.len() + 2);
    name.push_str("--");
    let mut pending_hyphen = false;
    for c in ascii.chars() {
        match c {
            'a'..='z' | '0'..='9' => {
                // Separators between two kept characters become one hyphen.
                if pending_hyphen && name.len() > 2 {
                    name.push('-');
                }
                pending_hyphen = false;
                name.push(c);
            }
            '/' | '.' | '_' | '-' => pending_hyphen = true,
            c if c.is_whitespace() => pending_hyphen = true,
            _ => {}
        }
    }

    if name.len() == 2 {
        name.push_str("token");
    }
    name
}
