pub mod palette;
pub mod render_board;
