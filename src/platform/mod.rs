//! Platform abstraction layer
//!
//! Handles the host-facing seams the game loop talks to:
//! - Input events and held movement keys ([`InputSource`])
//! - Time and frame pacing ([`FramePacer`])
//!
//! Front-ends implementing these live in the submodules.

pub mod autopilot;
pub mod pacer;
pub mod scripted;

pub use autopilot::Autopilot;
pub use pacer::{FixedStepPacer, RealtimePacer};
pub use scripted::{SceneRecord, ScriptFrame, ScriptedFrontend};

use glam::IVec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Return,
    Backspace,
    Escape,
    Left,
    Right,
    Up,
    Down,
    /// Any character key (letters, digits, punctuation)
    Char(char),
}

impl Key {
    /// Case-insensitive match against a character key
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

/// A discrete event drained from the platform queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or quit requested
    Quit,
    /// A key went down. `text` is the character it types, if any.
    KeyDown { key: Key, text: Option<char> },
    /// Primary mouse button pressed at a screen position
    MouseDown(IVec2),
}

impl InputEvent {
    /// Key press with the text a plain US layout would produce
    pub fn key(key: Key) -> Self {
        let text = match key {
            Key::Space => Some(' '),
            Key::Char(c) => Some(c),
            _ => None,
        };
        Self::KeyDown { key, text }
    }

    /// Key press that types `c`
    pub fn char(c: char) -> Self {
        match c {
            ' ' => Self::key(Key::Space),
            c => Self::key(Key::Char(c)),
        }
    }

    /// Key presses that type out `s`
    pub fn typed(s: &str) -> Vec<Self> {
        s.chars().map(Self::char).collect()
    }
}

/// Movement keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    /// Combined movement for one frame at `speed` pixels per key
    pub fn delta(&self, speed: i32) -> IVec2 {
        let mut delta = IVec2::ZERO;
        if self.left {
            delta.x -= speed;
        }
        if self.right {
            delta.x += speed;
        }
        if self.up {
            delta.y -= speed;
        }
        if self.down {
            delta.y += speed;
        }
        delta
    }
}

/// Source of player input
///
/// Polling never blocks. Every mode loop polls once per frame, even when it
/// ignores the result, so the host queue never backs up.
pub trait InputSource {
    /// Drain pending discrete events
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Movement keys down right now
    fn held_keys(&self) -> HeldKeys;
}

/// Clock and frame limiter
pub trait FramePacer {
    /// Milliseconds since the pacer started
    fn now_ms(&self) -> u64;
    /// Block until the current frame's budget has elapsed
    fn wait_next_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_delta() {
        let held = HeldKeys {
            left: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(held.delta(5), IVec2::new(-5, 5));

        let opposite = HeldKeys {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(opposite.delta(5), IVec2::ZERO);
    }

    #[test]
    fn test_key_is_char_ignores_case() {
        assert!(Key::Char('L').is_char('l'));
        assert!(Key::Char('m').is_char('M'));
        assert!(!Key::Space.is_char(' '));
    }

    #[test]
    fn test_typed_events() {
        let events = InputEvent::typed("a b");
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            InputEvent::KeyDown {
                key: Key::Space,
                text: Some(' ')
            }
        );
    }
}
