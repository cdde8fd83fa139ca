//! # Tokenloom Export - Stylesheet & Config Generators
//!
//! Read-only consumers of normalized [`tokenloom::Token`] lists. Each
//! generator is pure string templating over the canonical model and
//! relies only on its documented invariants (well-formed `css_variable`,
//! typed value payloads); nothing here re-derives categories or variable
//! names, and nothing touches the filesystem.
//!
//! ## Generators
//!
//! - [`to_css_variables`]: a `:root { ... }` custom property block
//! - [`to_scss_variables`]: `$name: value;` assignments
//! - [`to_tailwind_config`]: a `module.exports` config bucketing tokens
//!   into `theme.extend` by category
//! - [`to_nested_json`]: the token tree re-nested by path segments
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use tokenloom::parse_tokens;
//! use tokenloom_export::{to_css_variables, to_scss_variables};
//!
//! let result = parse_tokens(&json!({
//!     "color": { "primary": "#657e79" }
//! }));
//!
//! assert_eq!(
//!     to_css_variables(&result.tokens),
//!     ":root {\n  --color-primary: #657e79;\n}\n"
//! );
//! assert_eq!(to_scss_variables(&result.tokens), "$color-primary: #657e79;\n");
//! ```

mod css;
mod error;
mod json;
mod scss;
mod tailwind;

pub use css::to_css_variables;
pub use error::ExportError;
pub use json::to_nested_json;
pub use scss::to_scss_variables;
pub use tailwind::to_tailwind_config;
