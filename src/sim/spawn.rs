//! Random asteroid and special item spawning
//!
//! Each frame rolls two independent dice: one asteroid in
//! `ASTEROID_SPAWN_RATE` frames, and one item in ten times that. Nothing caps
//! the number of live entities; pruning keeps it in check.

use glam::IVec2;
use rand::Rng;

use super::state::{Asteroid, Session, SpecialItem};
use crate::consts::*;

/// What a spawn roll produced this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnResult {
    pub asteroid: bool,
    pub item: bool,
}

/// Build an asteroid with random size, speed and column, just above the screen
pub fn random_asteroid<R: Rng + ?Sized>(rng: &mut R) -> Asteroid {
    let size = rng.random_range(MIN_ASTEROID_SIZE..=MAX_ASTEROID_SIZE);
    let x = rng.random_range(0..=SCREEN_WIDTH);
    let speed = rng.random_range(MIN_ASTEROID_SPEED..=MAX_ASTEROID_SPEED);
    Asteroid::new(IVec2::new(x, SPAWN_CENTER_Y), size, speed)
}

/// Build a special item with random speed and column, just above the screen
pub fn random_item<R: Rng + ?Sized>(rng: &mut R) -> SpecialItem {
    let x = rng.random_range(0..=SCREEN_WIDTH);
    let speed = rng.random_range(MIN_ASTEROID_SPEED..=MAX_ASTEROID_SPEED);
    SpecialItem::new(IVec2::new(x, SPAWN_CENTER_Y), speed)
}

/// Roll the spawn dice for one frame, appending whatever comes up
pub fn spawn(session: &mut Session) -> SpawnResult {
    let mut result = SpawnResult::default();

    if session.rng.random_ratio(1, ASTEROID_SPAWN_RATE) {
        let asteroid = random_asteroid(&mut session.rng);
        log::debug!(
            "Spawned asteroid {}px at x={} speed={}",
            asteroid.rect.width(),
            asteroid.rect.center().x,
            asteroid.speed
        );
        session.asteroids.push(asteroid);
        result.asteroid = true;
    }

    if session.rng.random_ratio(1, ASTEROID_SPAWN_RATE * ITEM_RARITY) {
        let item = random_item(&mut session.rng);
        log::debug!("Spawned special item at x={}", item.rect.center().x);
        session.items.push(item);
        result.item = true;
    }

    result
}
