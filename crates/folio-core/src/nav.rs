//! Scroll and navigation helpers.
//!
//! Pure functions the host page calls from its scroll and keypress
//! handlers. Offsets are in CSS pixels from the top of the document.

use folio_content::Section;

/// Scroll offset past which the navbar condenses.
pub const NAVBAR_SCROLL_THRESHOLD: u32 = 100;

/// Scroll offset past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: u32 = 300;

/// Lookahead applied when deciding the active section: a section counts as
/// active once the viewport is within this many pixels of its top.
pub const ACTIVE_SECTION_OFFSET: u32 = 200;

/// A section's document position, measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPosition {
    pub section: Section,
    /// Distance from document top to the section's top edge.
    pub top: u32,
}

/// Whether the navbar should render in its condensed (scrolled) style.
pub fn navbar_condensed(scroll_y: u32) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Whether the scroll-to-top control should be visible.
pub fn scroll_top_visible(scroll_y: u32) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// The section to highlight in the navigation for a given scroll offset.
///
/// The last section (in document order) whose top minus the lookahead is at
/// or above the scroll offset wins. `None` before the first section comes
/// into range.
pub fn active_section(scroll_y: u32, positions: &[SectionPosition]) -> Option<Section> {
    let mut current = None;
    for pos in positions {
        if scroll_y >= pos.top.saturating_sub(ACTIVE_SECTION_OFFSET) {
            current = Some(pos.section);
        }
    }
    current
}

/// Keyboard shortcut targets: `h` jumps home, `c` jumps to contact.
///
/// The host must suppress this while an input or textarea has focus.
pub fn shortcut_target(key: char) -> Option<Section> {
    match key {
        'h' | 'H' => Some(Section::Home),
        'c' | 'C' => Some(Section::Contact),
        _ => None,
    }
}
