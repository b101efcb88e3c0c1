//! Error types for the folio engine.
//!
//! Structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Recoverability hints
//!
//! A missed registry lookup is deliberately NOT an error: callers receive
//! `Option::None` and treat it as "do nothing". The variants here cover
//! construction-time data integrity and ambient I/O failures only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Registry construction and record validation errors.
    Content,
    /// HTML generation errors.
    Render,
    /// Contact/mailto composition errors.
    Contact,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Content => write!(f, "content"),
            ErrorCategory::Render => write!(f, "render"),
            ErrorCategory::Contact => write!(f, "contact"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for folio.
#[derive(Error, Debug)]
pub enum Error {
    // Content errors (10-19)
    #[error("record '{id}' is missing required field '{field}'")]
    MissingField { id: String, field: String },

    #[error("duplicate project id '{id}' in registry")]
    DuplicateId { id: String },

    #[error("registry is empty")]
    EmptyRegistry,

    #[error("unknown project '{slug}'")]
    UnknownProject { slug: String },

    // Render errors (20-29)
    #[error("render failed: {0}")]
    Render(String),

    // Contact errors (30-39)
    #[error("contact message is missing '{field}'")]
    IncompleteMessage { field: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code.
    ///
    /// Codes are grouped by category:
    /// - 10-19: Content errors
    /// - 20-29: Render errors
    /// - 30-39: Contact errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::MissingField { .. } => 10,
            Error::DuplicateId { .. } => 11,
            Error::EmptyRegistry => 12,
            Error::UnknownProject { .. } => 13,
            Error::Render(_) => 20,
            Error::IncompleteMessage { .. } => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingField { .. }
            | Error::DuplicateId { .. }
            | Error::EmptyRegistry
            | Error::UnknownProject { .. } => ErrorCategory::Content,
            Error::Render(_) => ErrorCategory::Render,
            Error::IncompleteMessage { .. } => ErrorCategory::Contact,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable.
    ///
    /// Content errors are authoring mistakes fixed by editing the catalog;
    /// I/O errors are often transient.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::MissingField { .. } => false,
            Error::DuplicateId { .. } => false,
            Error::EmptyRegistry => false,
            Error::UnknownProject { .. } => true,
            Error::Render(_) => false,
            Error::IncompleteMessage { .. } => true,
            Error::Io(_) => true,
            Error::Json(_) => true,
        }
    }
}
