//! Celebration particles that rain down the viewport.

use std::time::{Duration, Instant};

use rand::{rngs::SmallRng, Rng};
use ratatui::style::{palette::tailwind, Color};

pub const PARTICLE_COUNT: usize = 100;
pub const LIFETIME: Duration = Duration::from_secs(3);

const COLORS: [Color; 6] = [
    tailwind::BLUE.c600,
    tailwind::VIOLET.c500,
    tailwind::EMERALD.c500,
    tailwind::AMBER.c500,
    tailwind::RED.c500,
    tailwind::PINK.c500,
];

const GLYPHS: [char; 2] = ['●', '■'];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub col: u16,
    pub row: f32,
    rows_per_sec: f32,
    pub glyph: char,
    pub color: Color,
}

/// One burst of falling particles. Positions are a pure function of elapsed
/// time so ticks of any cadence land every particle in the same place.
#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    particles: Vec<Particle>,
    started: Instant,
    height: u16,
}

impl Confetti {
    pub fn spawn(rng: &mut SmallRng, width: u16, height: u16, now: Instant) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);

        for _ in 0..PARTICLE_COUNT {
            // each particle crosses the full viewport in 1-3 seconds
            let fall_secs = rng.random_range(1.0..3.0f32);
            particles.push(Particle {
                col: rng.random_range(0..width),
                row: -1.0,
                rows_per_sec: (height as f32 + 1.0) / fall_secs,
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: COLORS[rng.random_range(0..COLORS.len())],
            });
        }

        Self {
            particles,
            started: now,
            height,
        }
    }

    /// Updates particle rows for the given time. Returns false once the
    /// burst has expired and should be dropped.
    pub fn advance(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= LIFETIME {
            return false;
        }

        let secs = elapsed.as_secs_f32();
        for particle in self.particles.iter_mut() {
            particle.row = -1.0 + particle.rows_per_sec * secs;
        }

        true
    }

    /// Particles currently inside the viewport.
    pub fn visible(&self) -> impl Iterator<Item = &Particle> {
        self.particles
            .iter()
            .filter(|p| p.row >= 0.0 && (p.row as u16) < self.height)
    }
}

#[cfg(test)]
#[path = "./confetti_tests.rs"]
mod tests;
