//! Reducer functions that compute new state from actions.

use std::sync::Mutex;

use rand::{rngs::SmallRng, SeedableRng};

use super::{action::Action, effect::Effect, state::State};

mod reducers;

/// Applies actions to state, producing new state and optional side effects.
///
/// Randomness lives here rather than in the reducers so tests can seed it.
pub struct Reducer {
    rng: Mutex<SmallRng>,
}

impl Reducer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    pub fn reduce(&self, state: &mut State, action: Action) -> Effect {
        match action {
            // Time
            Action::Tick(now) => {
                reducers::tick::tick(state, now);
                Effect::None
            }

            // Page geometry
            Action::Resize(width, height) => {
                reducers::page::resize(state, width, height);
                Effect::None
            }
            Action::ScrollBy(delta) => {
                reducers::page::scroll_by(state, delta);
                Effect::None
            }
            Action::ScrollTo(row) => {
                reducers::page::scroll_to(state, row);
                Effect::None
            }
            Action::JumpToSection(id) => {
                reducers::page::jump_to_section(state, id);
                Effect::None
            }

            // Theme
            Action::SetTheme(theme) => reducers::theme::set_theme(state, theme),
            Action::CycleTheme => reducers::theme::cycle_theme(state),

            // Project counter
            Action::AdjustCount { delta, now } => reducers::counter::adjust(state, delta, now),
            Action::RequestResetCount => {
                reducers::counter::request_reset(state);
                Effect::None
            }
            Action::ConfirmResetCount { now } => reducers::counter::confirm_reset(state, now),

            // Quotes
            Action::NextQuote => {
                let mut rng = self.rng.lock().unwrap();
                reducers::quote::next_quote(state, &mut rng);
                Effect::None
            }

            // Notices
            Action::Notify {
                message,
                severity,
                now,
            } => {
                reducers::notice::notify(state, message, severity, now);
                Effect::None
            }
            Action::DismissNotice => {
                reducers::notice::dismiss(state);
                Effect::None
            }

            // Modes and decorations
            Action::ToggleFocusMode { now } => {
                reducers::page::toggle_focus_mode(state, now);
                Effect::None
            }
            Action::ToggleAccessibility { now } => {
                reducers::page::toggle_accessibility(state, now);
                Effect::None
            }
            Action::LaunchConfetti { now } => {
                let mut rng = self.rng.lock().unwrap();
                reducers::page::launch_confetti(state, &mut rng, now);
                Effect::None
            }

            // Contact form
            Action::SubmitContact {
                name,
                email,
                message,
                now,
            } => {
                reducers::contact::submit(state, &name, &email, &message, now);
                Effect::None
            }

            // Overlays
            Action::OpenOverlay(overlay) => {
                reducers::page::open_overlay(state, overlay);
                Effect::None
            }
            Action::CloseOverlay => {
                reducers::page::close_overlay(state);
                Effect::None
            }

            // Terminal focus
            Action::FocusChanged { focused, now } => {
                reducers::page::focus_changed(state, focused, now);
                Effect::None
            }

            Action::Quit => {
                state.quit = true;
                Effect::None
            }
        }
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
