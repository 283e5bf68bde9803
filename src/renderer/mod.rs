//! Renderer contract
//!
//! The game hands the renderer one [`Scene`] per frame. Rendering is a pure
//! read: nothing it does feeds back into game state.

use crate::highscores::LeaderboardEntry;
use crate::sim::rect::Rect;
use crate::sim::state::{Asteroid, Bullet, Session, Ship, SpecialItem};

/// Heads-up display values shown during play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub lives: i32,
    pub powerup_active: bool,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        Self {
            score: session.score,
            lives: session.lives,
            powerup_active: session.ship.has_powerup(),
        }
    }

    /// HUD text, top-left, one line each
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Score: {}", self.score),
            format!("Lives: {}", self.lives),
            format!(
                "Powerup: {}",
                if self.powerup_active { "Active" } else { "Inactive" }
            ),
        ]
    }
}

/// Read-only view of every live entity
#[derive(Debug, Clone, Copy)]
pub struct Entities<'a> {
    pub ship: &'a Ship,
    pub bullets: &'a [Bullet],
    pub asteroids: &'a [Asteroid],
    pub items: &'a [SpecialItem],
}

impl<'a> Entities<'a> {
    pub fn from_session(session: &'a Session) -> Self {
        Self {
            ship: &session.ship,
            bullets: &session.bullets,
            asteroids: &session.asteroids,
            items: &session.items,
        }
    }
}

/// Everything needed to draw one frame of the current mode
#[derive(Debug, Clone, Copy)]
pub enum Scene<'a> {
    Menu,
    Playing {
        entities: Entities<'a>,
        hud: Hud,
    },
    NameEntry {
        text: &'a str,
        focused: bool,
        /// Minimum box; renderers may widen it to fit the text
        input_box: Rect,
    },
    GameOver {
        score: u32,
    },
    Leaderboard {
        entries: &'a [LeaderboardEntry],
    },
}

impl Scene<'_> {
    /// Centered text lines for the menu-style screens
    pub fn caption(&self) -> Vec<String> {
        match self {
            Scene::Menu => vec![
                "Asteroid Shooter".to_string(),
                "Press SPACE to Start".to_string(),
                "Press L to View Leaderboard".to_string(),
            ],
            Scene::Playing { hud, .. } => hud.lines().to_vec(),
            Scene::NameEntry { text, .. } => vec![text.to_string()],
            Scene::GameOver { score } => vec![
                "Game Over".to_string(),
                format!("Your Score: {score}"),
                "Press SPACE to Restart".to_string(),
                "Press M to go to Menu".to_string(),
            ],
            Scene::Leaderboard { entries } => {
                let mut lines = vec!["Leaderboard".to_string()];
                lines.extend(
                    entries
                        .iter()
                        .enumerate()
                        .map(|(i, e)| format!("{}. {}: {}", i + 1, e.name, e.score)),
                );
                lines.push("Press B to go Back".to_string());
                lines
            }
        }
    }
}

/// Something that can draw a scene
pub trait Renderer {
    fn render(&mut self, scene: &Scene<'_>);
}
