use crate::core::data::point::Point;

/// Raw input, independent of the windowing backend that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Point),
    UndoRequested,
    Quit,
}

impl InputEvent {
    #[must_use]
    pub fn pointer_down(x: i32, y: i32) -> Self {
        Self::PointerDown(Point { x, y })
    }
}
