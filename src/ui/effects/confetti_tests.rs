use std::time::{Duration, Instant};

use rand::SeedableRng;

use super::*;

fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

#[test]
fn spawns_full_particle_count() {
    let mut rng = seeded_rng();
    let now = Instant::now();
    let confetti = Confetti::spawn(&mut rng, 80, 24, now);
    assert_eq!(confetti.particles.len(), PARTICLE_COUNT);
}

#[test]
fn particles_start_above_the_viewport() {
    let mut rng = seeded_rng();
    let now = Instant::now();
    let confetti = Confetti::spawn(&mut rng, 80, 24, now);
    assert_eq!(confetti.visible().count(), 0);
}

#[test]
fn particles_fall_over_time() {
    let mut rng = seeded_rng();
    let now = Instant::now();
    let mut confetti = Confetti::spawn(&mut rng, 80, 24, now);

    assert!(confetti.advance(now + Duration::from_millis(500)));
    let halfway = confetti.visible().count();
    assert!(halfway > 0);

    // the fastest particles (1s fall time) have left the viewport while the
    // slowest are still inside it
    assert!(confetti.advance(now + Duration::from_millis(1500)));
    let late = confetti.visible().count();
    assert!(late > 0);
    assert!(late < PARTICLE_COUNT);
}

#[test]
fn burst_expires_after_lifetime() {
    let mut rng = seeded_rng();
    let now = Instant::now();
    let mut confetti = Confetti::spawn(&mut rng, 80, 24, now);

    assert!(confetti.advance(now + Duration::from_millis(2999)));
    assert!(!confetti.advance(now + LIFETIME));
}

#[test]
fn columns_stay_inside_the_viewport() {
    let mut rng = seeded_rng();
    let now = Instant::now();
    let confetti = Confetti::spawn(&mut rng, 40, 20, now);
    for particle in confetti.particles.iter() {
        assert!(particle.col < 40);
    }
}
