//! Quote rotation reducer.

use rand::{rngs::SmallRng, Rng};

use crate::{content::QUOTES, ui::store::state::State};

/// Picks a random quote other than the one on screen. With a single quote
/// in the pool there is nothing else to pick, so the index stays put.
pub fn next_quote(state: &mut State, rng: &mut SmallRng) {
    let len = QUOTES.len();

    if len < 2 {
        return;
    }

    let offset = rng.random_range(1..len);
    state.quote_idx = (state.quote_idx + offset) % len;
}
