pub mod board_input;
pub mod gui_app;
pub mod ports;
pub mod status;
