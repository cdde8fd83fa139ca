//! Property tests for the universally-quantified guarantees: variable
//! names are always well-formed, category detection is total, and both
//! are deterministic.

use proptest::prelude::*;
use tokenloom::{
    convert_color, css_variable_name, detect_category, detect_format, TokenCategory, TokenFormat,
};

fn is_well_formed(variable: &str) -> bool {
    match variable.strip_prefix("--") {
        Some(name) => {
            !name.is_empty()
                && !name.contains("--")
                && !name.starts_with('-')
                && !name.ends_with('-')
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }
        None => false,
    }
}

proptest! {
    #[test]
    fn css_variable_name_is_always_well_formed(path in ".*") {
        let variable = css_variable_name(&path);
        prop_assert!(is_well_formed(&variable), "ill-formed: {:?} -> {:?}", path, variable);
    }

    #[test]
    fn css_variable_name_is_idempotent(path in ".*") {
        let first = css_variable_name(&path);
        prop_assert_eq!(css_variable_name(&first), first);
    }

    #[test]
    fn css_variable_name_is_deterministic(path in ".*") {
        prop_assert_eq!(css_variable_name(&path), css_variable_name(&path));
    }

    #[test]
    fn detect_category_is_total(path in ".*") {
        // Any string maps to a member of the closed category set.
        let category = detect_category(&path);
        prop_assert!(matches!(
            category,
            TokenCategory::Color
                | TokenCategory::Typography
                | TokenCategory::Spacing
                | TokenCategory::Shadow
                | TokenCategory::Radius
                | TokenCategory::Grid
                | TokenCategory::Other
        ));
    }

    #[test]
    fn convert_color_never_panics_on_arbitrary_strings(text in ".*") {
        // Unparseable strings must come back as Err, not a panic.
        let _ = convert_color(&serde_json::Value::String(text));
    }

    #[test]
    fn detect_format_never_panics_on_arbitrary_strings(text in ".*") {
        let value = serde_json::Value::String(text);
        prop_assert_eq!(detect_format(&value), TokenFormat::Unknown);
    }
}

#[test]
fn empty_path_is_other() {
    assert_eq!(detect_category(""), TokenCategory::Other);
}
