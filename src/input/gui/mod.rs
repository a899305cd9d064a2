//! Windowed front end: winit for the window and input, pixels for the board framebuffer, egui for
//! the status overlay.

pub mod app;
pub mod commands;
pub mod errors;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
