//! # Tokenloom - Design Token Ingestion & Normalization
//!
//! `tokenloom` accepts an arbitrary JSON design-tokens export in one of
//! several unrelated schemas and converts it into one canonical,
//! strongly-typed token representation. Persistence layers, CSS variable
//! injection, and export generators all consume the normalized output;
//! none of them ever re-derive categories or variable names.
//!
//! ## Supported input schemas
//!
//! - **figma-variables** (DTCG): nested objects where a leaf carries
//!   `$type`/`$value` (and optionally `$extensions`)
//! - **style-dictionary**: `collections[].modes[].variables[]` exports
//!   with multiple named modes per collection
//! - **flat**: plainly nested JSON with no type markers; leaves inferred
//!   purely from value shape
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tokenloom::{parse_tokens, TokenCategory, TokenKind};
//!
//! let document = json!({
//!     "Color": {
//!         "Primary": {
//!             "500": { "$type": "color", "$value": { "hex": "#657e79" } }
//!         }
//!     },
//!     "Spacing": {
//!         "md": { "$type": "dimension", "$value": { "value": 16, "unit": "px" } }
//!     }
//! });
//!
//! let result = parse_tokens(&document);
//! assert!(result.errors.is_empty());
//! assert_eq!(result.tokens.len(), 2);
//!
//! let color = &result.tokens[0];
//! assert_eq!(color.css_variable, "--color-primary-500");
//! assert_eq!(color.category, TokenCategory::Color);
//! assert_eq!(color.kind, TokenKind::Color);
//! ```
//!
//! ## Diagnostics instead of panics
//!
//! The parser never raises for malformed input data. Whole-document
//! problems (unrecognized schema, invalid JSON text) produce entries in
//! [`ParseResult::errors`]; per-leaf problems (null values, unparseable
//! colors) produce [`ParseResult::warnings`] and traversal continues.
//! Import flows block on errors and surface warnings for review.
//!
//! ## Purity
//!
//! Parsing is synchronous, single-pass, and a pure function of its input:
//! no I/O, no shared state, cost linear in the number of JSON nodes.
//! Parsing the same document twice yields identical paths and variable
//! names, so re-imports never spuriously rename CSS variables.

pub mod category;
pub mod color;
pub mod css;
pub mod format;
pub mod infer;
mod parse;
mod token;
mod walker;

pub use category::detect_category;
pub use color::{convert_color, rgb_to_hex, ColorValue, RgbChannels};
pub use css::css_variable_name;
pub use format::detect_format;
pub use infer::infer_kind;
pub use parse::{
    parse_token_file, parse_token_file_with_options, parse_tokens, parse_tokens_with_options,
    ParseOptions,
};
pub use token::{
    DimensionValue, ParseMetadata, ParseResult, ShadowLayer, ShadowValue, Token, TokenCategory,
    TokenFormat, TokenKind, TokenMetadata, TokenValue,
};
