//! Pairwise collision resolution and pruning
//!
//! Resolution runs once per frame in a fixed order so simultaneous hits
//! always settle the same way:
//! 1. bullet × asteroid
//! 2. ship × asteroid (may end the session, skipping the rest)
//! 3. ship × special item
//! 4. asteroid × asteroid
//!
//! Removed entities never leave holes mid-scan: surviving entities are
//! collected into a new vector and swapped in.

use super::state::Session;

/// What happened during one frame's collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Bullets that hit an asteroid (each scored one point)
    pub bullet_hits: u32,
    /// Lives lost to asteroids
    pub ship_hits: u32,
    /// Special items picked up
    pub items_collected: u32,
    /// Overlapping asteroid pairs found
    pub asteroid_pairs: u32,
    /// Lives ran out; later stages were skipped
    pub game_over: bool,
}

/// Resolve every collision for this frame
pub fn resolve_collisions(session: &mut Session, now: u64) -> CollisionReport {
    let mut report = CollisionReport::default();

    resolve_bullets(session, now, &mut report);

    resolve_ship_asteroids(session, now, &mut report);
    if report.game_over {
        return report;
    }

    resolve_ship_items(session, now, &mut report);
    resolve_asteroid_pairs(session, now, &mut report);

    report
}

/// Each bullet destroys at most the first asteroid it overlaps
fn resolve_bullets(session: &mut Session, now: u64, report: &mut CollisionReport) {
    let bullets = std::mem::take(&mut session.bullets);
    let mut surviving = Vec::with_capacity(bullets.len());

    for bullet in bullets {
        let hit = session
            .asteroids
            .iter_mut()
            .find(|asteroid| bullet.rect.colliderect(&asteroid.rect));

        match hit {
            Some(asteroid) => {
                asteroid.shatter(now);
                session.score += 1;
                report.bullet_hits += 1;
            }
            None => surviving.push(bullet),
        }
    }

    session.bullets = surviving;
}

fn resolve_ship_asteroids(session: &mut Session, now: u64, report: &mut CollisionReport) {
    let ship = &mut session.ship;

    for asteroid in &mut session.asteroids {
        if ship.is_immune() || !ship.rect.colliderect(&asteroid.rect) {
            continue;
        }

        session.lives -= 1;
        ship.start_immunity(now);
        asteroid.shatter(now);
        report.ship_hits += 1;
        log::debug!("Ship hit, {} lives left", session.lives);

        if session.lives <= 0 {
            report.game_over = true;
            return;
        }
    }
}

fn resolve_ship_items(session: &mut Session, now: u64, report: &mut CollisionReport) {
    let ship = &mut session.ship;

    session.items.retain(|item| {
        if ship.rect.colliderect(&item.rect) {
            ship.start_powerup(now);
            report.items_collected += 1;
            false
        } else {
            true
        }
    });
}

/// Overlapping asteroids shatter each other. No score, no removal.
fn resolve_asteroid_pairs(session: &mut Session, now: u64, report: &mut CollisionReport) {
    let count = session.asteroids.len();
    for i in 0..count {
        let (head, tail) = session.asteroids.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            if first.rect.colliderect(&second.rect) {
                first.shatter(now);
                second.shatter(now);
                report.asteroid_pairs += 1;
            }
        }
    }
}

/// Drop bullets above the screen and asteroids/items below it
pub fn prune_offscreen(session: &mut Session) {
    session.bullets.retain(|b| b.on_screen());
    session.asteroids.retain(|a| a.on_screen());
    session.items.retain(|i| i.on_screen());
}

/// Drop shattered asteroids whose grace period is over
pub fn prune_shattered(session: &mut Session, now: u64) {
    session.asteroids.retain(|a| !a.should_disappear(now));
}
