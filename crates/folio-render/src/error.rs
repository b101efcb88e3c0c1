//! Error types for HTML generation.

use thiserror::Error;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while generating the page.
///
/// The detail fragment renderer is infallible; these cover the full-page
/// generator only.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization error (embedded page data).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
