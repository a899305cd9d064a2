use winit::event::{ElementState, MouseButton};
use winit::keyboard::Key;

use crate::controllers::interactive::InputEvent;
use crate::core::data::point::Point;

/// Turns raw winit mouse and keyboard events into controller input.
///
/// winit reports button presses without a position, so the last cursor position is tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardInputState {
    cursor: Option<Point>,
    undo_key: char,
}

impl BoardInputState {
    #[must_use]
    pub fn new(undo_key: char) -> Self {
        Self {
            cursor: None,
            undo_key,
        }
    }

    /// `position` is already in board pixel coordinates.
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        if state != ElementState::Pressed || button != MouseButton::Left {
            return None;
        }

        self.cursor.map(InputEvent::PointerDown)
    }

    /// Key repeats are dropped so that holding the undo key takes back a single move.
    #[must_use]
    pub fn key_input(&self, key: &Key, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        let Key::Character(text) = key else {
            return None;
        };

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.eq_ignore_ascii_case(&self.undo_key) => Some(InputEvent::UndoRequested),
            _ => None,
        }
    }
}
