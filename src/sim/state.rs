//! Session state and entity types
//!
//! A [`Session`] owns everything one game needs: the ship, every live
//! bullet, asteroid and special item, the score and lives counters, and the
//! seeded RNG the spawner draws from.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effect::TimedEffect;
use super::rect::Rect;
use crate::consts::*;

/// Anything that moves by a fixed per-frame velocity
pub trait Entity {
    /// Advance one frame
    fn update(&mut self);
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
    /// Invulnerable after taking a hit
    pub immunity: TimedEffect,
    /// Triple shot
    pub powerup: TimedEffect,
}

impl Default for Ship {
    fn default() -> Self {
        let center = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT - SHIP_START_OFFSET_Y);
        Self {
            rect: Rect::from_center(center, IVec2::from(SHIP_SIZE)),
            immunity: TimedEffect::new(IMMUNITY_DURATION_MS),
            powerup: TimedEffect::new(POWERUP_DURATION_MS),
        }
    }
}

impl Ship {
    /// Move by a pixel delta. Not clamped to the screen.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.translate(IVec2::new(dx, dy));
    }

    #[inline]
    pub fn is_immune(&self) -> bool {
        self.immunity.is_set()
    }

    #[inline]
    pub fn has_powerup(&self) -> bool {
        self.powerup.is_set()
    }

    pub fn start_immunity(&mut self, now: u64) {
        self.immunity.start(now);
    }

    pub fn start_powerup(&mut self, now: u64) {
        self.powerup.start(now);
    }

    /// Clear immunity and power-up once their windows have passed
    pub fn refresh_effects(&mut self, now: u64) {
        self.immunity.refresh(now);
        self.powerup.refresh(now);
    }

    /// Bullets produced by one press of the fire key
    ///
    /// With the power-up: three bullets spread around the ship's center.
    /// Without: one bullet at the center. Either way they start centered on
    /// the ship's top edge.
    pub fn fire(&self) -> Vec<Bullet> {
        let center_x = self.rect.center().x;
        let top = self.rect.top();
        if self.has_powerup() {
            TRIPLE_SHOT_OFFSETS
                .iter()
                .map(|dx| Bullet::new(center_x + dx, top, true))
                .collect()
        } else {
            vec![Bullet::new(center_x, top, false)]
        }
    }
}

/// A bullet flying up the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    /// Fired as part of a triple shot (drawn differently)
    pub is_triple: bool,
}

impl Bullet {
    /// Bullet centered on `(x, y)`
    pub fn new(x: i32, y: i32, is_triple: bool) -> Self {
        Self {
            rect: Rect::from_center(IVec2::new(x, y), IVec2::from(BULLET_SIZE)),
            is_triple,
        }
    }

    /// Still visible (bottom edge below the top of the screen)
    pub fn on_screen(&self) -> bool {
        self.rect.bottom() > 0
    }
}

impl Entity for Bullet {
    fn update(&mut self) {
        self.rect.translate(IVec2::new(0, -BULLET_SPEED));
    }
}

/// A falling asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub rect: Rect,
    /// Pixels per frame, downward
    pub speed: i32,
    /// Set once hit; the asteroid lingers until the window passes
    pub shatter: TimedEffect,
}

impl Asteroid {
    /// Square asteroid of side `size` centered on `center`
    pub fn new(center: IVec2, size: i32, speed: i32) -> Self {
        Self {
            rect: Rect::from_center(center, IVec2::splat(size)),
            speed,
            shatter: TimedEffect::new(SHATTER_DURATION_MS),
        }
    }

    #[inline]
    pub fn is_shattered(&self) -> bool {
        self.shatter.is_set()
    }

    /// When the asteroid shattered (meaningless until it has)
    #[inline]
    pub fn shattered_at(&self) -> u64 {
        self.shatter.started_at()
    }

    /// Break the asteroid. Already-shattered asteroids keep their original timestamp.
    pub fn shatter(&mut self, now: u64) {
        if !self.is_shattered() {
            self.shatter.start(now);
        }
    }

    /// Shattered and past the grace period
    pub fn should_disappear(&self, now: u64) -> bool {
        self.shatter.has_elapsed(now)
    }

    /// Top edge still above the bottom of the screen
    pub fn on_screen(&self) -> bool {
        self.rect.top() < SCREEN_HEIGHT
    }
}

impl Entity for Asteroid {
    fn update(&mut self) {
        if !self.is_shattered() {
            self.rect.translate(IVec2::new(0, self.speed));
        }
    }
}

/// A falling power-up pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialItem {
    pub rect: Rect,
    pub speed: i32,
}

impl SpecialItem {
    pub fn new(center: IVec2, speed: i32) -> Self {
        Self {
            rect: Rect::from_center(center, IVec2::from(SPECIAL_ITEM_SIZE)),
            speed,
        }
    }

    pub fn on_screen(&self) -> bool {
        self.rect.top() < SCREEN_HEIGHT
    }
}

impl Entity for SpecialItem {
    fn update(&mut self) {
        self.rect.translate(IVec2::new(0, self.speed));
    }
}

/// Complete state of one game (ship, entities, counters, RNG)
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the spawner RNG started from
    pub seed: u64,
    pub rng: Pcg32,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub items: Vec<SpecialItem>,
    pub score: u32,
    pub lives: i32,
    /// Frames simulated so far
    pub frame: u64,
}

impl Session {
    /// Fresh session: ship at its start position, no entities, score 0, 3 lives
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::default(),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            items: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            frame: 0,
        }
    }

    /// Out of lives
    #[inline]
    pub fn is_over(&self) -> bool {
        self.lives <= 0
    }
}
