//! Animation primitives. Everything here is a pure function of time so the
//! tick reducer can drive it without touching the clock itself.

pub mod confetti;
pub mod reveal;
pub mod typewriter;
