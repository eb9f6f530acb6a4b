//! Clock-driven reducer. Every animation and timer in the app advances
//! here, from a single `Instant`, so tests can drive time explicitly.

use std::time::{Duration, Instant};

use strum::IntoEnumIterator;

use crate::ui::{
    effects::reveal,
    store::{derived, state::SectionId, state::State},
};

use super::{contact, notice};

/// Pause between the skills section revealing and the bars starting to fill.
pub const FILL_DELAY: Duration = Duration::from_millis(300);

/// How long the skill bars take to grow to their full width.
pub const FILL_DURATION: Duration = Duration::from_millis(1500);

/// Advances everything time-based to `now`.
pub fn tick(state: &mut State, now: Instant) {
    state.typewriter.advance(now);

    if let Some(until) = state.pulse_until {
        if until <= now {
            state.pulse_until = None;
        }
    }

    notice::expire(state, now);
    contact::complete_pending_send(state, now);

    if let Some(confetti) = state.confetti.as_mut() {
        if !confetti.advance(now) {
            state.confetti = None;
        }
    }

    reveal_sections(state, now);
    fill_skill_bars(state, now);
}

/// Marks sections revealed once enough of them scrolls on screen. Revealed
/// sections stay revealed.
fn reveal_sections(state: &mut State, now: Instant) {
    let body_rows = derived::body_height(state);

    for (i, section) in SectionId::iter().enumerate() {
        if state.revealed[i] {
            continue;
        }

        let top = derived::section_top(section);
        if reveal::is_visible(top, section.height(), state.scroll, body_rows) {
            state.revealed[i] = true;
        }
    }

    // the fill needs more of the section on screen than the reveal does,
    // so it gets its own check
    if state.skills_fill_started.is_none() {
        let top = derived::section_top(SectionId::Skills);
        let height = SectionId::Skills.height();
        if reveal::is_half_visible(top, height, state.scroll, body_rows) {
            state.skills_fill_started = Some(now);
        }
    }
}

/// Grows the skill bars from 0 to their target widths over a fixed span,
/// eased so the growth slows toward the end.
fn fill_skill_bars(state: &mut State, now: Instant) {
    let Some(started) = state.skills_fill_started else {
        return;
    };

    let elapsed = now.duration_since(started);
    if elapsed <= FILL_DELAY {
        return;
    }

    let t = ((elapsed - FILL_DELAY).as_secs_f32() / FILL_DURATION.as_secs_f32()).min(1.0);
    state.skills_fill = t * t * (3.0 - 2.0 * t);
}
