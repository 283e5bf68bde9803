//! Scripted front-end for tests and replays
//!
//! Plays back a fixed list of per-frame inputs and records a summary of
//! every scene it is asked to draw. Once the script runs out it sends
//! `Quit` on every poll, so any mode loop ends.

use std::collections::VecDeque;

use super::{HeldKeys, InputEvent, InputSource};
use crate::renderer::{Hud, Renderer, Scene};

/// Input for one polled frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptFrame {
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
}

impl ScriptFrame {
    /// A frame with no input
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn events(events: Vec<InputEvent>) -> Self {
        Self {
            events,
            held: HeldKeys::default(),
        }
    }

    pub fn held(held: HeldKeys) -> Self {
        Self {
            events: Vec::new(),
            held,
        }
    }
}

/// Which kind of scene was drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneRecord {
    Menu,
    Playing(Hud),
    NameEntry(String),
    GameOver(u32),
    Leaderboard(Vec<(String, u32)>),
}

impl From<&Scene<'_>> for SceneRecord {
    fn from(scene: &Scene<'_>) -> Self {
        match scene {
            Scene::Menu => SceneRecord::Menu,
            Scene::Playing { hud, .. } => SceneRecord::Playing(*hud),
            Scene::NameEntry { text, .. } => SceneRecord::NameEntry(text.to_string()),
            Scene::GameOver { score } => SceneRecord::GameOver(*score),
            Scene::Leaderboard { entries } => SceneRecord::Leaderboard(
                entries.iter().map(|e| (e.name.clone(), e.score)).collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    script: VecDeque<ScriptFrame>,
    held: HeldKeys,
    polls: usize,
    rendered: Vec<SceneRecord>,
}

impl ScriptedFrontend {
    pub fn new(frames: impl IntoIterator<Item = ScriptFrame>) -> Self {
        Self {
            script: frames.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Script frames not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Times `poll_events` was called
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Every scene drawn, in order
    pub fn rendered(&self) -> &[SceneRecord] {
        &self.rendered
    }

    /// HUD of the last drawn play frame
    pub fn last_hud(&self) -> Option<Hud> {
        self.rendered.iter().rev().find_map(|r| match r {
            SceneRecord::Playing(hud) => Some(*hud),
            _ => None,
        })
    }
}

impl InputSource for ScriptedFrontend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        match self.script.pop_front() {
            Some(frame) => {
                self.held = frame.held;
                frame.events
            }
            None => {
                self.held = HeldKeys::default();
                vec![InputEvent::Quit]
            }
        }
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

impl Renderer for ScriptedFrontend {
    fn render(&mut self, scene: &Scene<'_>) {
        self.rendered.push(SceneRecord::from(scene));
    }
}
