//! Folio core: session state machine, page features, and the CLI driver.
//!
//! The heart of this crate is [`session`]: an Elm-style state machine for
//! the project detail modal. Host events are mapped to a closed [`Msg`] set
//! and the machine answers with [`SurfaceOp`] effects the host applies to
//! its visible surface. The rest covers the surrounding page features:
//! contact mailto composition, theme preference persistence, and scroll
//! navigation helpers.

pub mod contact;
pub mod logging;
pub mod nav;
pub mod session;
pub mod theme;

pub use contact::ContactMessage;
pub use session::{ModalSession, Msg, SessionState, SurfaceOp};
pub use theme::ThemeStore;
