//! Input messages for the modal session state machine.
//!
//! A deliberately closed set: hosts translate their native events (click,
//! keypress, tap) into these messages, and every transition is handled with
//! explicit `match` arms in [`super::ModalSession::update`].
//!
//! When adding new variants, keep the host-event mapping shallow and update
//! `ModalSession::update` to handle the transition explicitly.

use folio_common::ProjectId;

/// Single message type consumed by the session update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A "view details" affordance was activated for the given slug.
    Select(ProjectId),
    /// The explicit close control was activated.
    Close,
    /// A click landed on the dimmed backdrop (not the content area; the
    /// host is responsible for that distinction).
    BackdropClick,
    /// The cancellation key (Escape) was pressed.
    CancelKey,
}

impl Msg {
    /// Convenience constructor for selection by slug.
    pub fn select(slug: impl Into<String>) -> Self {
        Msg::Select(ProjectId::new(slug))
    }
}
