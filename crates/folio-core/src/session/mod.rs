//! Modal session lifecycle.
//!
//! Two-state machine for the project detail view: `Closed` and
//! `Open(slug)`. At most one session exists at a time; selecting a project
//! while one is open replaces it. All transitions run synchronously inside
//! a single event-handling turn, so the single state variable is the whole
//! mutual-exclusion story.
//!
//! The machine owns no rendering surface. It returns [`SurfaceOp`] effects
//! and the host applies them: mounting a fragment implies suppressing
//! background scroll, unmounting restores it. The machine tracks the
//! scroll-lock flag so hosts and tests can observe it without a live page.

pub mod msg;

pub use msg::Msg;

use folio_common::ProjectId;
use folio_content::Registry;
use folio_render::render_detail;
use tracing::debug;

/// Session state: the detail view is either closed or open on one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open(ProjectId),
}

impl SessionState {
    /// True when a detail view is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, SessionState::Open(_))
    }
}

/// Effect for the host to apply to its visible surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    /// Attach the fragment to the surface and suppress background scroll.
    /// Replaces whatever the surface currently shows.
    Mount { fragment: String },
    /// Detach the current fragment and restore background scroll.
    Unmount,
}

/// The modal session state machine.
///
/// Borrows the registry; the registry outlives every session and is never
/// mutated by one.
#[derive(Debug)]
pub struct ModalSession<'a> {
    registry: &'a Registry,
    state: SessionState,
    scroll_locked: bool,
}

impl<'a> ModalSession<'a> {
    /// Create a closed session over the given registry.
    pub fn new(registry: &'a Registry) -> Self {
        ModalSession {
            registry,
            state: SessionState::Closed,
            scroll_locked: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True when a detail view is showing.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Slug of the open project, if any.
    pub fn open_project(&self) -> Option<&ProjectId> {
        match &self.state {
            SessionState::Open(id) => Some(id),
            SessionState::Closed => None,
        }
    }

    /// Whether background scroll is currently suppressed.
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Apply one message and return the effect for the host, if any.
    ///
    /// - `Select` with an unknown slug is absorbed silently: no transition,
    ///   no effect, a diagnostic log only.
    /// - `Select` while open replaces the current session (fresh mount).
    /// - `Close`, `BackdropClick`, and `CancelKey` are handled identically;
    ///   while closed they are no-ops.
    pub fn update(&mut self, msg: Msg) -> Option<SurfaceOp> {
        match msg {
            Msg::Select(id) => match self.registry.lookup(&id) {
                Some(record) => {
                    let fragment = render_detail(record);
                    debug!(slug = %id, replacing = self.is_open(), "session open");
                    self.state = SessionState::Open(id);
                    self.scroll_locked = true;
                    Some(SurfaceOp::Mount { fragment })
                }
                None => {
                    debug!(slug = %id, "selection ignored: unknown project");
                    None
                }
            },
            Msg::Close | Msg::BackdropClick | Msg::CancelKey => {
                if self.state.is_open() {
                    debug!("session close");
                    self.state = SessionState::Closed;
                    self.scroll_locked = false;
                    Some(SurfaceOp::Unmount)
                } else {
                    None
                }
            }
        }
    }
}
