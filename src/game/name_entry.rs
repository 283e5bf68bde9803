//! Name entry after a game ends
//!
//! A single-line text box. It starts focused; clicking inside toggles focus
//! and clicking elsewhere drops it. Keys only edit while focused.

use glam::IVec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{InputEvent, Key};
use crate::sim::rect::Rect;

/// Longest name accepted
pub const MAX_NAME_LEN: usize = 16;

/// Result of feeding one event to the text box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntryStatus {
    /// Still typing
    Editing,
    /// Return pressed; the (possibly empty) name
    Submitted(String),
    /// Quit requested; nothing should be saved
    Aborted,
}

#[derive(Debug, Clone)]
pub struct NameEntry {
    text: String,
    focused: bool,
    input_box: Rect,
}

impl Default for NameEntry {
    fn default() -> Self {
        Self {
            text: String::new(),
            focused: true,
            input_box: Rect::new(SCREEN_WIDTH / 2 - 100, SCREEN_HEIGHT / 2, 200, 32),
        }
    }
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn input_box(&self) -> Rect {
        self.input_box
    }

    pub fn handle(&mut self, event: &InputEvent) -> NameEntryStatus {
        match event {
            InputEvent::Quit => return NameEntryStatus::Aborted,
            InputEvent::MouseDown(pos) => self.click(*pos),
            InputEvent::KeyDown { key, text } if self.focused => match key {
                Key::Return => return NameEntryStatus::Submitted(self.text.clone()),
                Key::Backspace => {
                    self.text.pop();
                }
                _ => self.push(*text),
            },
            InputEvent::KeyDown { .. } => {}
        }
        NameEntryStatus::Editing
    }

    fn click(&mut self, pos: IVec2) {
        self.focused = self.input_box.contains_point(pos) && !self.focused;
    }

    fn push(&mut self, text: Option<char>) {
        let Some(c) = text.filter(|c| !c.is_control()) else {
            return;
        };
        if self.text.chars().count() < MAX_NAME_LEN {
            self.text.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(entry: &mut NameEntry, events: &[InputEvent]) -> NameEntryStatus {
        let mut status = NameEntryStatus::Editing;
        for event in events {
            status = entry.handle(event);
        }
        status
    }

    #[test]
    fn test_type_and_submit() {
        let mut entry = NameEntry::new();
        let mut events = InputEvent::typed("Ada");
        events.push(InputEvent::key(Key::Return));
        assert_eq!(feed(&mut entry, &events), NameEntryStatus::Submitted("Ada".into()));
    }

    #[test]
    fn test_backspace() {
        let mut entry = NameEntry::new();
        let mut events = InputEvent::typed("Bob");
        events.push(InputEvent::key(Key::Backspace));
        events.push(InputEvent::key(Key::Backspace));
        feed(&mut entry, &events);
        assert_eq!(entry.text(), "B");

        // backspace on empty text is harmless
        feed(&mut entry, &[InputEvent::key(Key::Backspace), InputEvent::key(Key::Backspace)]);
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_non_printing_keys_ignored() {
        let mut entry = NameEntry::new();
        feed(
            &mut entry,
            &[
                InputEvent::key(Key::Left),
                InputEvent::key(Key::Escape),
                InputEvent::KeyDown {
                    key: Key::Char('\t'),
                    text: Some('\t'),
                },
            ],
        );
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_quit_aborts() {
        let mut entry = NameEntry::new();
        let mut events = InputEvent::typed("Eve");
        events.push(InputEvent::Quit);
        assert_eq!(feed(&mut entry, &events), NameEntryStatus::Aborted);
    }

    #[test]
    fn test_click_outside_unfocuses() {
        let mut entry = NameEntry::new();
        entry.handle(&InputEvent::MouseDown(IVec2::new(5, 5)));
        assert!(!entry.is_focused());
        feed(&mut entry, &InputEvent::typed("x"));
        assert_eq!(entry.text(), "");
        assert_eq!(entry.handle(&InputEvent::key(Key::Return)), NameEntryStatus::Editing);

        // click inside brings focus back
        let inside = entry.input_box().center();
        entry.handle(&InputEvent::MouseDown(inside));
        assert!(entry.is_focused());
    }

    #[test]
    fn test_click_inside_toggles_focus() {
        let mut entry = NameEntry::new();
        let inside = entry.input_box().center();
        entry.handle(&InputEvent::MouseDown(inside));
        assert!(!entry.is_focused());
        entry.handle(&InputEvent::MouseDown(inside));
        assert!(entry.is_focused());
    }

    #[test]
    fn test_name_length_capped() {
        let mut entry = NameEntry::new();
        feed(&mut entry, &InputEvent::typed("abcdefghijklmnopqrstuvwxyz"));
        assert_eq!(entry.text().chars().count(), MAX_NAME_LEN);
    }
}
