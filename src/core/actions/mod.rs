pub mod render_board;
