pub mod board_geometry;
pub mod board_snapshot;
pub mod board_view;
pub mod candidate_move;
pub mod colour;
pub mod piece;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod square;
