//! Autopilot front-end for headless runs
//!
//! Watches each rendered scene and decides the input for the next poll:
//! starts games from the menu, hunts the nearest falling asteroid, types a
//! name on game over, looks at the leaderboard once, then quits after the
//! configured number of games.

use glam::IVec2;

use super::{HeldKeys, InputEvent, InputSource, Key};
use crate::consts::{FPS, SCREEN_WIDTH};
use crate::game::name_entry::MAX_NAME_LEN;
use crate::renderer::{Entities, Hud, Renderer, Scene};

/// Frames between shots
const FIRE_INTERVAL: u64 = 8;
/// Horizontal slack before steering kicks in
const AIM_TOLERANCE: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    None,
    Menu,
    Playing,
    NameEntry,
    GameOver,
    Leaderboard,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    name: String,
    max_sessions: u32,
    games_finished: u32,
    leaderboard_visited: bool,
    screen: Screen,
    frame: u64,
    pending: Vec<InputEvent>,
    held: HeldKeys,
}

impl Autopilot {
    pub fn new(name: impl Into<String>, max_sessions: u32) -> Self {
        Self {
            name: name.into(),
            max_sessions,
            games_finished: 0,
            leaderboard_visited: false,
            screen: Screen::None,
            frame: 0,
            pending: Vec::new(),
            held: HeldKeys::default(),
        }
    }

    /// Games that reached the game over screen
    pub fn games_finished(&self) -> u32 {
        self.games_finished
    }

    fn on_menu(&mut self) {
        let next = if self.games_finished < self.max_sessions {
            InputEvent::key(Key::Space)
        } else if !self.leaderboard_visited {
            InputEvent::key(Key::Char('l'))
        } else {
            InputEvent::Quit
        };
        self.pending.push(next);
    }

    fn on_playing(&mut self, entities: &Entities<'_>, hud: &Hud) {
        if self.screen != Screen::Playing {
            self.frame = 0;
        }
        self.frame += 1;
        if self.frame % FPS as u64 == 0 {
            log::debug!("{}", hud.lines().join("  "));
        }

        let ship = entities.ship.rect;
        let ship_x = ship.center().x;

        // Lowest intact asteroid still above the ship
        let target = entities
            .asteroids
            .iter()
            .filter(|a| !a.is_shattered() && a.rect.bottom() < ship.top())
            .max_by_key(|a| a.rect.bottom())
            .map(|a| a.rect.center().x)
            .unwrap_or(SCREEN_WIDTH / 2);

        self.held = HeldKeys {
            left: target < ship_x - AIM_TOLERANCE && ship.left() > 0,
            right: target > ship_x + AIM_TOLERANCE && ship.right() < SCREEN_WIDTH,
            ..Default::default()
        };

        if self.frame % FIRE_INTERVAL == 0 {
            self.pending.push(InputEvent::key(Key::Space));
        }
    }

    fn on_name_entry(&mut self, text: &str, focused: bool, box_center: IVec2) {
        if !focused {
            self.pending.push(InputEvent::MouseDown(box_center));
            return;
        }

        let target: String = self.name.chars().take(MAX_NAME_LEN).collect();
        let next = if !target.starts_with(text) {
            InputEvent::key(Key::Backspace)
        } else if text == target {
            InputEvent::key(Key::Return)
        } else {
            match target.chars().nth(text.chars().count()) {
                Some(c) => InputEvent::char(c),
                None => InputEvent::key(Key::Return),
            }
        };
        self.pending.push(next);
    }

    fn on_game_over(&mut self, score: u32) {
        if self.screen != Screen::GameOver {
            self.games_finished += 1;
            log::info!(
                "Autopilot finished game {}/{} with score {score}",
                self.games_finished,
                self.max_sessions
            );
        }
        self.pending.push(InputEvent::key(Key::Char('m')));
    }

    fn on_leaderboard(&mut self, lines: Vec<String>) {
        if self.screen != Screen::Leaderboard {
            for line in lines {
                log::info!("{line}");
            }
        }
        self.leaderboard_visited = true;
        self.pending.push(InputEvent::key(Key::Char('b')));
    }
}

impl InputSource for Autopilot {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

impl Renderer for Autopilot {
    fn render(&mut self, scene: &Scene<'_>) {
        self.pending.clear();
        if !matches!(scene, Scene::Playing { .. }) {
            self.held = HeldKeys::default();
        }

        let screen = match scene {
            Scene::Menu => {
                self.on_menu();
                Screen::Menu
            }
            Scene::Playing { entities, hud } => {
                self.on_playing(entities, hud);
                Screen::Playing
            }
            Scene::NameEntry {
                text,
                focused,
                input_box,
            } => {
                self.on_name_entry(text, *focused, input_box.center());
                Screen::NameEntry
            }
            Scene::GameOver { score } => {
                self.on_game_over(*score);
                Screen::GameOver
            }
            Scene::Leaderboard { .. } => {
                self.on_leaderboard(scene.caption());
                Screen::Leaderboard
            }
        };
        self.screen = screen;
    }
}
