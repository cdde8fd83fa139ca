//! Category inference from token paths.
//!
//! Matching is substring-based against an ordered keyword table. The order
//! resolves real ambiguities: a path containing both "border" and "radius"
//! must land in radius, so radius keywords are checked before the generic
//! color keywords (which include a bare "border").

use crate::token::TokenCategory;

/// Keyword table, checked top to bottom; first bucket with a match wins.
const CATEGORY_KEYWORDS: &[(TokenCategory, &[&str])] = &[
    (
        TokenCategory::Radius,
        &["radius", "corner", "rounded", "border-radius"],
    ),
    (
        TokenCategory::Shadow,
        &["shadow", "elevation", "drop-shadow"],
    ),
    (
        TokenCategory::Grid,
        &["grid", "breakpoint", "container", "column"],
    ),
    (
        TokenCategory::Spacing,
        &["spacing", "space", "gap", "margin", "padding"],
    ),
    (
        TokenCategory::Typography,
        &[
            "typography",
            "font",
            "heading",
            "body",
            "display",
            "line-height",
            "letter-spacing",
        ],
    ),
    (
        TokenCategory::Color,
        &[
            "color",
            "background",
            "foreground",
            "fill",
            "stroke",
            "text",
            "border",
        ],
    ),
];

/// Classifies a token path into a semantic category.
///
/// Total over all strings; anything without a keyword match (including the
/// empty string) resolves to [`TokenCategory::Other`].
pub fn detect_category(path: &str) -> TokenCategory {
    let lower = path.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *category;
        }
    }
    TokenCategory::Other
}
