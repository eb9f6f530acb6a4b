//! Page-level reducers: scrolling, viewport, overlays, and mode toggles.

use std::time::Instant;

use rand::rngs::SmallRng;

use crate::ui::{
    effects::confetti::Confetti,
    store::{
        derived,
        state::{Overlay, SectionId, Severity, State},
    },
};

use super::{notice, theme};

/// Records a new terminal size and keeps the scroll offset in range.
pub fn resize(state: &mut State, width: u16, height: u16) {
    state.viewport = (width, height);
    state.scroll = state.scroll.min(derived::max_scroll(state));
}

/// Moves the scroll offset by a signed number of rows, clamped to content.
pub fn scroll_by(state: &mut State, delta: i32) {
    let target = i32::from(state.scroll).saturating_add(delta).max(0) as u16;
    state.scroll = target.min(derived::max_scroll(state));
}

/// Jumps the scroll offset to an absolute row, clamped to content.
pub fn scroll_to(state: &mut State, row: u16) {
    state.scroll = row.min(derived::max_scroll(state));
}

/// Scrolls so a section starts at the top of the viewport.
pub fn jump_to_section(state: &mut State, id: SectionId) {
    scroll_to(state, derived::section_top(id));
}

/// Flips focus mode, which hides the decorative parts of the page.
pub fn toggle_focus_mode(state: &mut State, now: Instant) {
    state.focus_mode = !state.focus_mode;

    let message = if state.focus_mode {
        "Focus mode on. Distractions hidden."
    } else {
        "Focus mode off."
    };
    notice::notify(state, String::from(message), Severity::Info, now);
}

/// Flips the high contrast palette on or off.
pub fn toggle_accessibility(state: &mut State, now: Instant) {
    state.accessibility = !state.accessibility;
    theme::refresh_colors(state);

    let message = if state.accessibility {
        "High contrast mode on."
    } else {
        "High contrast mode off."
    };
    notice::notify(state, String::from(message), Severity::Info, now);
}

/// Starts a confetti burst sized to the current viewport.
pub fn launch_confetti(state: &mut State, rng: &mut SmallRng, now: Instant) {
    let (width, height) = state.viewport;
    state.confetti = Some(Confetti::spawn(rng, width, height, now));
}

pub fn open_overlay(state: &mut State, overlay: Overlay) {
    state.overlay = overlay;
}

pub fn close_overlay(state: &mut State) {
    state.overlay = Overlay::None;
}

/// Reacts to the terminal gaining or losing focus with a short notice,
/// mirroring how a page reports going online or offline.
pub fn focus_changed(state: &mut State, focused: bool, now: Instant) {
    if focused {
        notice::notify(
            state,
            String::from("Welcome back!"),
            Severity::Success,
            now,
        );
    } else {
        notice::notify(
            state,
            String::from("Terminal lost focus."),
            Severity::Warning,
            now,
        );
    }
}
