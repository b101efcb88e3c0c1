//! HTML generation for the folio portfolio site.
//!
//! Two render surfaces:
//!
//! - **Detail fragment** ([`render_detail`]): the project modal body, a pure
//!   function from a validated record to markup. This is the piece the
//!   session state machine mounts and unmounts.
//! - **Full page** ([`render_page`]): the complete single-page site built
//!   from the registry, with inline theme CSS and the project card grid.
//!
//! Every interpolated string is escaped: record data is trusted today but
//! the contract does not assume it stays that way.

pub mod config;
pub mod detail;
pub mod error;
pub mod escape;
pub mod page;

pub use config::{OwnerProfile, PageSections, RenderConfig, Theme};
pub use detail::render_detail;
pub use error::{RenderError, Result};
pub use escape::escape_html;
pub use page::render_page;
