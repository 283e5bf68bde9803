//! One frame of play
//!
//! Fixed order per frame: fire → move ship → move entities → spawn → prune
//! off-screen → collide → prune shattered → refresh ship effects. Drawing
//! and frame pacing belong to the caller.

use super::collision::{prune_offscreen, prune_shattered, resolve_collisions};
use super::spawn::spawn;
use super::state::{Entity, Session};
use crate::consts::*;
use crate::platform::{HeldKeys, InputEvent, Key};

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Fire key presses this frame
    pub fire: u32,
    /// Movement keys currently down
    pub held: HeldKeys,
    /// Window closed / quit requested
    pub quit: bool,
}

impl TickInput {
    /// Fold this frame's discrete events together with the held-key snapshot
    pub fn from_events(events: &[InputEvent], held: HeldKeys) -> Self {
        let mut input = Self {
            held,
            ..Default::default()
        };
        for event in events {
            match event {
                InputEvent::Quit => {
                    input.quit = true;
                    break;
                }
                InputEvent::KeyDown { key: Key::Space, .. } => input.fire += 1,
                _ => {}
            }
        }
        input
    }
}

/// How the frame ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep playing
    Continue,
    /// Quit requested; nothing was simulated
    Quit,
    /// Last life lost this frame
    GameOver,
}

/// Advance the session by one frame at time `now` (milliseconds)
pub fn tick(session: &mut Session, input: &TickInput, now: u64) -> TickOutcome {
    if input.quit {
        return TickOutcome::Quit;
    }

    session.frame += 1;

    for _ in 0..input.fire {
        let shots = session.ship.fire();
        session.bullets.extend(shots);
    }

    let delta = input.held.delta(SHIP_SPEED);
    session.ship.move_by(delta.x, delta.y);

    session.bullets.iter_mut().for_each(Entity::update);
    session.asteroids.iter_mut().for_each(Entity::update);
    session.items.iter_mut().for_each(Entity::update);

    spawn(session);
    prune_offscreen(session);

    let report = resolve_collisions(session, now);
    if report.game_over {
        log::info!("Game over at frame {} with score {}", session.frame, session.score);
        return TickOutcome::GameOver;
    }
    if report.bullet_hits > 0 || report.items_collected > 0 {
        log::debug!("Frame {}: {:?}", session.frame, report);
    }

    prune_shattered(session, now);
    session.ship.refresh_effects(now);

    TickOutcome::Continue
}
