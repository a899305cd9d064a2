use crate::core::data::board_snapshot::BoardSnapshot;
use crate::core::data::square::Square;

/// Everything the render step needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub board: BoardSnapshot,
    pub selected: Option<Square>,
}
