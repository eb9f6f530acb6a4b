//! Character-by-character headline animation.

use std::time::{Duration, Instant};

pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);
pub const HOLD_INTERVAL: Duration = Duration::from_millis(2000);

/// Cursor over a cyclic phrase list, alternating between typing and deleting.
///
/// Every mutation happens in [`Typewriter::advance`], driven by the tick
/// loop's injected clock, so steps can never overlap and tests can run the
/// whole cycle on a virtual timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase_idx: usize,
    char_idx: usize,
    deleting: bool,
    due: Instant,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str], now: Instant) -> Self {
        Self {
            phrases,
            phrase_idx: 0,
            char_idx: 0,
            deleting: false,
            due: now + TYPE_INTERVAL,
        }
    }

    /// Applies every step whose deadline has passed. Returns true if the
    /// visible text changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.phrases.is_empty() {
            return false;
        }

        let mut stepped = false;
        while self.due <= now {
            self.step();
            stepped = true;
        }
        stepped
    }

    // One character mutation plus arming the next deadline.
    fn step(&mut self) {
        let phrase = self.phrases[self.phrase_idx];
        let len = phrase.chars().count();

        if self.deleting {
            if self.char_idx > 0 {
                self.char_idx -= 1;
            }

            if self.char_idx == 0 {
                self.deleting = false;
                self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
                self.due += TYPE_INTERVAL;
            } else {
                self.due += DELETE_INTERVAL;
            }
        } else {
            if self.char_idx < len {
                self.char_idx += 1;
            }

            if self.char_idx == len {
                // pause on the finished word before deleting
                self.deleting = true;
                self.due += HOLD_INTERVAL;
            } else {
                self.due += TYPE_INTERVAL;
            }
        }
    }

    /// Currently visible prefix of the active phrase.
    pub fn line(&self) -> &'static str {
        if self.phrases.is_empty() {
            return "";
        }

        let phrase = self.phrases[self.phrase_idx];
        match phrase.char_indices().nth(self.char_idx) {
            Some((byte_idx, _)) => &phrase[..byte_idx],
            None => phrase,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_idx
    }

    pub fn char_index(&self) -> usize {
        self.char_idx
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

#[cfg(test)]
#[path = "./typewriter_tests.rs"]
mod tests;
