//! Notification state reducers for the single-slot toast.

use std::time::{Duration, Instant};

use crate::ui::store::state::{Notice, Severity, State};

/// How long a notice stays on screen before dismissing itself.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Shows a notice, replacing whatever notice is currently visible.
pub fn notify(state: &mut State, message: String, severity: Severity, now: Instant) {
    state.notice = Some(Notice {
        message,
        severity,
        shown_at: now,
    });
}

/// Dismisses the current notice immediately.
pub fn dismiss(state: &mut State) {
    state.notice = None;
}

/// Dismisses the current notice once its display time has elapsed.
pub fn expire(state: &mut State, now: Instant) {
    if let Some(notice) = &state.notice {
        if now.duration_since(notice.shown_at) >= DISPLAY_DURATION {
            state.notice = None;
        }
    }
}
