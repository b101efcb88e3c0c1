//! End-to-end session lifecycle over the built-in catalog.
//!
//! Drives the modal state machine through realistic event sequences and
//! checks the mounted fragments against the rendered detail markup.

use folio_content::catalog::builtin_registry;
use folio_core::{ModalSession, Msg, SessionState, SurfaceOp};
use folio_render::render_detail;

#[test]
fn browse_open_switch_close() {
    let registry = builtin_registry().unwrap();
    let mut session = ModalSession::new(&registry);

    // Open the first project.
    let op = session.update(Msg::select("coastal")).unwrap();
    let SurfaceOp::Mount { fragment } = op else {
        panic!("expected Mount");
    };
    let record = registry.lookup(&"coastal".into()).unwrap();
    assert_eq!(fragment, render_detail(record));
    assert!(session.is_scroll_locked());

    // Switch to another without closing first.
    let op = session.update(Msg::select("un-disaster")).unwrap();
    assert!(matches!(op, SurfaceOp::Mount { .. }));
    assert_eq!(session.open_project().unwrap().as_str(), "un-disaster");
    assert!(session.is_scroll_locked());

    // Close via Escape.
    assert_eq!(session.update(Msg::CancelKey), Some(SurfaceOp::Unmount));
    assert_eq!(session.state(), &SessionState::Closed);
    assert!(!session.is_scroll_locked());
}

#[test]
fn every_catalog_project_opens() {
    let registry = builtin_registry().unwrap();
    let mut session = ModalSession::new(&registry);

    for id in registry.ids() {
        let op = session.update(Msg::Select(id.clone())).unwrap();
        let SurfaceOp::Mount { fragment } = op else {
            panic!("expected Mount for {id}");
        };
        assert!(
            fragment.contains("modal-section"),
            "fragment for {id} missing section markup"
        );
        assert_eq!(session.update(Msg::Close), Some(SurfaceOp::Unmount));
    }
}

#[test]
fn stale_selection_after_close_is_absorbed() {
    let registry = builtin_registry().unwrap();
    let mut session = ModalSession::new(&registry);

    session.update(Msg::select("wuppertal"));
    session.update(Msg::BackdropClick);

    // A queued click for a slug that no longer resolves does nothing.
    assert_eq!(session.update(Msg::select("retired-project")), None);
    assert_eq!(session.state(), &SessionState::Closed);
    assert!(!session.is_scroll_locked());
}

#[test]
fn redundant_close_events_are_noops() {
    let registry = builtin_registry().unwrap();
    let mut session = ModalSession::new(&registry);

    session.update(Msg::select("sustainable-ai"));
    assert_eq!(session.update(Msg::Close), Some(SurfaceOp::Unmount));

    // Backdrop click and Escape arriving after the close change nothing.
    assert_eq!(session.update(Msg::BackdropClick), None);
    assert_eq!(session.update(Msg::CancelKey), None);
    assert_eq!(session.state(), &SessionState::Closed);
}

#[test]
fn fragment_reflects_record_shape() {
    let registry = builtin_registry().unwrap();
    let mut session = ModalSession::new(&registry);

    // groundwater ships without an image: title-only header.
    let SurfaceOp::Mount { fragment } = session.update(Msg::select("groundwater")).unwrap() else {
        panic!("expected Mount");
    };
    assert!(fragment.contains("modal-header-plain"));
    assert!(!fragment.contains("<img"));

    // sustainable-ai carries a partner credit.
    let SurfaceOp::Mount { fragment } = session.update(Msg::select("sustainable-ai")).unwrap()
    else {
        panic!("expected Mount");
    };
    assert!(fragment.contains("Dutch Ministry of Finance"));
}
