use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

pub trait GuiPresenterPort {
    /// Replaces the board image shown on the next render.
    fn present_board(&mut self, buffer: &PixelBuffer);

    /// Draws the board with the egui overlay on top.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;

    /// Maps a physical window position to board pixel coordinates. Positions outside the board
    /// map outside `0..board_size`.
    fn window_to_board(&self, x: f64, y: f64) -> Point;
}
