//! Input adapters that turn windowing events into controller input.

#[cfg(feature = "gui")]
pub mod gui;
