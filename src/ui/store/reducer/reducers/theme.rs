//! Theme reducers for switching and persisting color palettes.

use crate::ui::{
    colors::{Colors, Theme},
    store::{derived, effect::Effect, state::State},
};

/// Applies a theme and persists it.
pub fn set_theme(state: &mut State, theme: Theme) -> Effect {
    state.theme = theme;
    refresh_colors(state);
    Effect::SavePreferences(derived::preferences(state))
}

/// Advances to the next theme in the rotation and persists it.
pub fn cycle_theme(state: &mut State) -> Effect {
    set_theme(state, state.theme.next())
}

/// Rebuilds the active palette from the current theme. The high contrast
/// palette overrides every theme while accessibility is on.
pub fn refresh_colors(state: &mut State) {
    state.colors = if state.accessibility {
        Colors::accessible()
    } else {
        Colors::new(
            state.theme.to_palette(state.true_color_enabled),
            state.true_color_enabled,
        )
    };
}
