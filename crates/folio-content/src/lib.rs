//! Folio content layer.
//!
//! The immutable project registry and everything that feeds it:
//! - `ProjectRecord`: the validated data model for one portfolio project
//! - `Registry`: construction-time-validated lookup table keyed by slug
//! - `catalog`: the built-in project data the site ships with
//! - `search`: keyword routing from free-text queries to page sections

pub mod catalog;
pub mod record;
pub mod registry;
pub mod search;

pub use record::ProjectRecord;
pub use registry::Registry;
pub use search::{route_query, Section};
