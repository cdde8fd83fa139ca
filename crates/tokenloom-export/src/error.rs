//! Error type for export generation.

use thiserror::Error;

/// Errors from the structured exporters.
///
/// The plain-text exporters (CSS, SCSS) are infallible; only generators
/// that serialize through `serde_json` or refuse empty input can fail.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Token payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The token list was empty; there is nothing to generate.
    #[error("no tokens to export")]
    EmptyTokenSet,
}
