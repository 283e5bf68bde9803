//! Asteroid Shooter - dodge and destroy falling asteroids
//!
//! Core modules:
//! - `sim`: Per-frame simulation (movement, spawning, collisions, timed effects)
//! - `game`: Top-level mode state machine (menu, playing, game over, leaderboard)
//! - `renderer`: Renderer contract and per-mode scene description
//! - `platform`: Input and frame pacing abstraction
//! - `highscores`: Top-10 leaderboard and its stores
//! - `persistence`: JSON document load/save
//! - `settings`: Non-gameplay runtime settings

pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, PersistenceError};
pub use game::{Game, GameMode};
pub use highscores::{JsonFileStore, Leaderboard, LeaderboardEntry, LeaderboardStore, MemoryStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Target frame rate; every speed below is per frame
    pub const FPS: u32 = 60;

    /// Ship movement per held key per frame
    pub const SHIP_SPEED: i32 = 5;
    /// Bullets travel straight up
    pub const BULLET_SPEED: i32 = 7;
    /// Asteroid and special item fall speed range (inclusive)
    pub const MIN_ASTEROID_SPEED: i32 = 2;
    pub const MAX_ASTEROID_SPEED: i32 = 5;
    /// Asteroid side length range (inclusive)
    pub const MIN_ASTEROID_SIZE: i32 = 30;
    pub const MAX_ASTEROID_SIZE: i32 = 80;

    /// One asteroid per this many frames on average
    pub const ASTEROID_SPAWN_RATE: u32 = 50;
    /// Special items are this many times rarer than asteroids
    pub const ITEM_RARITY: u32 = 10;
    /// Spawned entities are centered this far above the screen
    pub const SPAWN_CENTER_Y: i32 = -50;

    /// Timed effect durations (milliseconds)
    pub const IMMUNITY_DURATION_MS: u64 = 2000;
    pub const SHATTER_DURATION_MS: u64 = 250;
    pub const POWERUP_DURATION_MS: u64 = 5000;

    /// Triple shot horizontal offsets from ship center
    pub const TRIPLE_SHOT_OFFSETS: [i32; 3] = [-20, 0, 20];

    /// Session start values
    pub const STARTING_LIVES: i32 = 3;

    /// Sprite sizes supplied by the asset layer
    pub const SHIP_SIZE: (i32, i32) = (50, 50);
    pub const BULLET_SIZE: (i32, i32) = (10, 20);
    pub const SPECIAL_ITEM_SIZE: (i32, i32) = (30, 30);
    /// Ship starts this far above the bottom edge (center)
    pub const SHIP_START_OFFSET_Y: i32 = 50;
}
