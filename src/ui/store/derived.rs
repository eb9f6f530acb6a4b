//! Pure selectors computing values derived from state.

use strum::IntoEnumIterator;

use crate::config::Preferences;

use super::state::{SectionId, State};

/// Blank rows between adjacent sections.
pub const SECTION_GAP: u16 = 1;

/// Rows below the top of the viewport at which a section counts as
/// the one currently being read.
const ACTIVE_ANCHOR: u16 = 3;

/// Scroll offset past which the back-to-top hint appears.
const BACK_TO_TOP_THRESHOLD: u16 = 10;

/// Row of the first line of a section within the full page.
pub fn section_top(id: SectionId) -> u16 {
    SectionId::iter()
        .take_while(|s| *s != id)
        .fold(0, |top, s| top + s.height() + SECTION_GAP)
}

/// Total height of the page content in rows.
pub fn content_height() -> u16 {
    let total: u16 = SectionId::iter().map(|s| s.height() + SECTION_GAP).sum();
    total.saturating_sub(SECTION_GAP)
}

/// Largest scroll offset that still shows a full viewport of content.
pub fn max_scroll(state: &State) -> u16 {
    content_height().saturating_sub(body_height(state))
}

/// Rows available for page content once the header and footer chrome
/// is subtracted from the terminal height.
pub fn body_height(state: &State) -> u16 {
    state.viewport.1.saturating_sub(8)
}

/// Section the reader is currently looking at. The last section whose
/// top has passed an anchor row near the top of the viewport wins.
pub fn active_section(state: &State) -> SectionId {
    let anchor = state.scroll.saturating_add(ACTIVE_ANCHOR);
    SectionId::iter()
        .filter(|s| section_top(*s) <= anchor)
        .last()
        .unwrap_or(SectionId::Hero)
}

pub fn show_back_to_top(state: &State) -> bool {
    state.scroll > BACK_TO_TOP_THRESHOLD
}

/// Snapshot of the persisted slice of state.
pub fn preferences(state: &State) -> Preferences {
    Preferences {
        theme: state.theme.to_string(),
        project_count: state.project_count,
    }
}
