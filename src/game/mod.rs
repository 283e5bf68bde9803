//! Top-level game modes
//!
//! The game is a closed set of modes. Each non-terminal mode runs its own
//! poll → render → wait loop and returns the next mode:
//!
//! | Mode          | Input       | Next mode                           |
//! |---------------|-------------|-------------------------------------|
//! | `Menu`        | Space       | `Playing`                           |
//! |               | L           | `Leaderboard`                       |
//! | `Playing`     | lives gone  | name entry, then `GameOver(score)`  |
//! | `Leaderboard` | B           | `Menu`                              |
//! | `GameOver`    | Space       | `Playing` (fresh session)           |
//! |               | M           | `Menu`                              |
//!
//! A quit event in any mode, name entry included, goes straight to `Quit`.

pub mod name_entry;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::GameError;
use crate::highscores::LeaderboardStore;
use crate::platform::{FramePacer, HeldKeys, InputEvent, InputSource, Key};
use crate::renderer::{Entities, Hud, Renderer, Scene};
use crate::sim::{Session, TickInput, TickOutcome, tick};
use name_entry::{NameEntry, NameEntryStatus};

/// Current top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    GameOver { score: u32 },
    Leaderboard,
    /// Terminal
    Quit,
}

/// Menu: Space starts a game, L shows the leaderboard
pub fn menu_transition(event: &InputEvent) -> Option<GameMode> {
    match event {
        InputEvent::Quit => Some(GameMode::Quit),
        InputEvent::KeyDown { key: Key::Space, .. } => Some(GameMode::Playing),
        InputEvent::KeyDown { key, .. } if key.is_char('l') => Some(GameMode::Leaderboard),
        _ => None,
    }
}

/// Leaderboard: B goes back to the menu
pub fn leaderboard_transition(event: &InputEvent) -> Option<GameMode> {
    match event {
        InputEvent::Quit => Some(GameMode::Quit),
        InputEvent::KeyDown { key, .. } if key.is_char('b') => Some(GameMode::Menu),
        _ => None,
    }
}

/// Game over: Space plays again, M returns to the menu
pub fn game_over_transition(event: &InputEvent) -> Option<GameMode> {
    match event {
        InputEvent::Quit => Some(GameMode::Quit),
        InputEvent::KeyDown { key: Key::Space, .. } => Some(GameMode::Playing),
        InputEvent::KeyDown { key, .. } if key.is_char('m') => Some(GameMode::Menu),
        _ => None,
    }
}

/// Input and output in one front-end
pub trait Frontend: InputSource + Renderer {}

impl<T: InputSource + Renderer> Frontend for T {}

/// The whole program: front-end, pacer, leaderboard store and mode loop
pub struct Game<F, P, S> {
    frontend: F,
    pacer: P,
    store: S,
    /// Seeds each new session
    seeds: Pcg32,
    sessions: u32,
}

impl<F: Frontend, P: FramePacer, S: LeaderboardStore> Game<F, P, S> {
    pub fn new(frontend: F, pacer: P, store: S, seed: u64) -> Self {
        Self {
            frontend,
            pacer,
            store,
            seeds: Pcg32::seed_from_u64(seed),
            sessions: 0,
        }
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sessions started so far
    pub fn sessions_played(&self) -> u32 {
        self.sessions
    }

    /// Run from the menu until something quits
    pub fn run(&mut self) -> Result<(), GameError> {
        let mut mode = GameMode::Menu;
        while mode != GameMode::Quit {
            let next = self.run_mode(mode)?;
            log::info!("{mode:?} -> {next:?}");
            mode = next;
        }
        Ok(())
    }

    /// Run one mode's loop and return the mode it hands off to
    pub fn run_mode(&mut self, mode: GameMode) -> Result<GameMode, GameError> {
        match mode {
            GameMode::Menu => Ok(self.menu()),
            GameMode::Playing => self.play(),
            GameMode::GameOver { score } => Ok(self.game_over(score)),
            GameMode::Leaderboard => self.leaderboard(),
            GameMode::Quit => Ok(GameMode::Quit),
        }
    }

    fn poll(&mut self) -> (Vec<InputEvent>, HeldKeys) {
        let events = self.frontend.poll_events();
        let held = self.frontend.held_keys();
        (events, held)
    }

    fn menu(&mut self) -> GameMode {
        loop {
            let (events, _) = self.poll();
            if let Some(next) = events.iter().find_map(menu_transition) {
                return next;
            }
            self.frontend.render(&Scene::Menu);
            self.pacer.wait_next_frame();
        }
    }

    fn play(&mut self) -> Result<GameMode, GameError> {
        let seed = self.seeds.random::<u64>();
        self.sessions += 1;
        let mut session = Session::new(seed);
        log::info!("Session {} started (seed {seed})", self.sessions);

        loop {
            let (events, held) = self.poll();
            let input = TickInput::from_events(&events, held);
            match tick(&mut session, &input, self.pacer.now_ms()) {
                TickOutcome::Quit => return Ok(GameMode::Quit),
                TickOutcome::GameOver => return self.capture_name(session.score),
                TickOutcome::Continue => {}
            }

            self.frontend.render(&Scene::Playing {
                entities: Entities::from_session(&session),
                hud: Hud::from_session(&session),
            });
            self.pacer.wait_next_frame();
        }
    }

    /// Collect a name for the leaderboard, then show the game over screen
    fn capture_name(&mut self, score: u32) -> Result<GameMode, GameError> {
        let mut entry = NameEntry::new();

        loop {
            let (events, _) = self.poll();
            for event in &events {
                match entry.handle(event) {
                    NameEntryStatus::Editing => {}
                    NameEntryStatus::Aborted => {
                        log::info!("Name entry aborted, score {score} not recorded");
                        return Ok(GameMode::Quit);
                    }
                    NameEntryStatus::Submitted(name) => {
                        if name.is_empty() {
                            log::info!("No name entered, score {score} not recorded");
                        } else {
                            self.store
                                .record(&name, score)
                                .map_err(GameError::Leaderboard)?;
                        }
                        return Ok(GameMode::GameOver { score });
                    }
                }
            }

            self.frontend.render(&Scene::NameEntry {
                text: entry.text(),
                focused: entry.is_focused(),
                input_box: entry.input_box(),
            });
            self.pacer.wait_next_frame();
        }
    }

    fn game_over(&mut self, score: u32) -> GameMode {
        loop {
            let (events, _) = self.poll();
            if let Some(next) = events.iter().find_map(game_over_transition) {
                return next;
            }
            self.frontend.render(&Scene::GameOver { score });
            self.pacer.wait_next_frame();
        }
    }

    fn leaderboard(&mut self) -> Result<GameMode, GameError> {
        let board = self.store.load().map_err(GameError::Leaderboard)?;

        loop {
            let (events, _) = self.poll();
            if let Some(next) = events.iter().find_map(leaderboard_transition) {
                return Ok(next);
            }
            self.frontend.render(&Scene::Leaderboard {
                entries: board.entries(),
            });
            self.pacer.wait_next_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_transitions() {
        assert_eq!(menu_transition(&InputEvent::key(Key::Space)), Some(GameMode::Playing));
        assert_eq!(
            menu_transition(&InputEvent::key(Key::Char('L'))),
            Some(GameMode::Leaderboard)
        );
        assert_eq!(menu_transition(&InputEvent::Quit), Some(GameMode::Quit));
        assert_eq!(menu_transition(&InputEvent::key(Key::Char('m'))), None);
        assert_eq!(menu_transition(&InputEvent::key(Key::Return)), None);
    }

    #[test]
    fn test_leaderboard_transitions() {
        assert_eq!(
            leaderboard_transition(&InputEvent::key(Key::Char('b'))),
            Some(GameMode::Menu)
        );
        assert_eq!(leaderboard_transition(&InputEvent::Quit), Some(GameMode::Quit));
        assert_eq!(leaderboard_transition(&InputEvent::key(Key::Space)), None);
    }

    #[test]
    fn test_game_over_transitions() {
        assert_eq!(
            game_over_transition(&InputEvent::key(Key::Space)),
            Some(GameMode::Playing)
        );
        assert_eq!(
            game_over_transition(&InputEvent::key(Key::Char('m'))),
            Some(GameMode::Menu)
        );
        assert_eq!(game_over_transition(&InputEvent::Quit), Some(GameMode::Quit));
        assert_eq!(game_over_transition(&InputEvent::key(Key::Char('l'))), None);
    }

    #[test]
    fn test_mouse_is_ignored_outside_name_entry() {
        let click = InputEvent::MouseDown(glam::IVec2::new(10, 10));
        assert_eq!(menu_transition(&click), None);
        assert_eq!(game_over_transition(&click), None);
        assert_eq!(leaderboard_transition(&click), None);
    }
}
