//! Frame simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws, sleeps or
//! reads a clock:
//! - Time arrives as a millisecond timestamp per frame
//! - Randomness comes from the session's seeded RNG
//! - Entity vectors keep spawn order, so collisions resolve deterministically

pub mod collision;
pub mod effect;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, prune_offscreen, prune_shattered, resolve_collisions};
pub use effect::TimedEffect;
pub use rect::Rect;
pub use spawn::{SpawnResult, random_asteroid, random_item, spawn};
pub use state::{Asteroid, Bullet, Entity, Session, Ship, SpecialItem};
pub use tick::{TickInput, TickOutcome, tick};
