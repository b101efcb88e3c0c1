//! Folio common types and errors.
//!
//! This crate provides foundational types shared across folio modules:
//! - Project identity type used as the registry key
//! - Common error types with stable codes and categories

pub mod error;
pub mod id;

pub use error::{Error, ErrorCategory, Result};
pub use id::ProjectId;
