//! Project counter reducers.

use std::time::{Duration, Instant};

use crate::ui::store::{
    derived,
    effect::Effect,
    state::{Overlay, Severity, State},
};

use super::notice;

/// How long the counter display stays emphasized after a change.
pub const PULSE_DURATION: Duration = Duration::from_millis(200);

/// Every multiple of this count earns a celebration notice.
const MILESTONE: u32 = 5;

/// Applies a signed delta to the counter, clamping at zero, and persists
/// the result. Reaching a milestone on the way up earns a celebration.
pub fn adjust(state: &mut State, delta: i32, now: Instant) -> Effect {
    state.project_count = if delta >= 0 {
        state.project_count.saturating_add(delta as u32)
    } else {
        state.project_count.saturating_sub(delta.unsigned_abs())
    };
    state.pulse_until = Some(now + PULSE_DURATION);

    if delta > 0 && state.project_count > 0 && state.project_count % MILESTONE == 0 {
        notice::notify(
            state,
            format!("{} projects! Keep shipping. 🎉", state.project_count),
            Severity::Success,
            now,
        );
    }

    Effect::SavePreferences(derived::preferences(state))
}

/// Opens the reset confirmation dialog. Does nothing when the counter is
/// already at zero.
pub fn request_reset(state: &mut State) {
    if state.project_count > 0 {
        state.overlay = Overlay::ConfirmReset;
    }
}

/// Zeroes the counter after the dialog has been confirmed and persists it.
pub fn confirm_reset(state: &mut State, now: Instant) -> Effect {
    state.overlay = Overlay::None;

    if state.project_count == 0 {
        return Effect::None;
    }

    state.project_count = 0;
    state.pulse_until = Some(now + PULSE_DURATION);
    notice::notify(
        state,
        String::from("Project counter reset."),
        Severity::Info,
        now,
    );

    Effect::SavePreferences(derived::preferences(state))
}
