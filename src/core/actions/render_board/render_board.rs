use rayon::prelude::*;

use crate::core::actions::render_board::palette::{BoardPalette, GLYPH_SIZE, glyph_bit};
use crate::core::data::board_geometry::BoardGeometry;
use crate::core::data::board_view::BoardView;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderBoardError {
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

/// Rasterises the board into an RGB buffer of `geometry.board_size()` square pixels.
///
/// Rows are filled in parallel; each pixel depends only on `view`, so the result is deterministic.
pub fn render_board(
    view: &BoardView,
    geometry: BoardGeometry,
    palette: &BoardPalette,
) -> Result<PixelBuffer, RenderBoardError> {
    let pixel_rect = geometry.pixel_rect()?;
    let width = pixel_rect.width() as usize;
    let row_bytes = width * BYTES_PER_PIXEL;
    let mut data = vec![0u8; row_bytes * pixel_rect.height() as usize];

    data.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let colour = pixel_colour(view, geometry, palette, Point { x: x as i32, y: y as i32 });
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }
        });

    Ok(PixelBuffer::from_data(pixel_rect, data)?)
}

fn pixel_colour(
    view: &BoardView,
    geometry: BoardGeometry,
    palette: &BoardPalette,
    point: Point,
) -> Colour {
    let Some(square) = geometry.square_at(point) else {
        return palette.dark_square;
    };

    let mut colour = if square.is_light() {
        palette.light_square
    } else {
        palette.dark_square
    };

    if view.selected == Some(square) {
        colour = colour.blend(palette.highlight, palette.highlight_strength);
    }

    let Some(piece) = view.board.piece_at(square) else {
        return colour;
    };

    let origin = geometry.cell_origin(square);
    let cell = geometry.cell_size() as i32;
    let local_x = point.x - origin.x;
    let local_y = point.y - origin.y;

    let inset = cell / 8;
    let inner = cell - 2 * inset;
    if local_x < inset || local_y < inset || local_x >= inset + inner || local_y >= inset + inner {
        return colour;
    }

    // The glyph sits centred in the inset block with one glyph cell of padding on each side.
    let glyph_cell = inner / (GLYPH_SIZE as i32 + 2);
    if glyph_cell > 0 {
        let glyph_origin = inset + (inner - glyph_cell * GLYPH_SIZE as i32) / 2;
        let gx = local_x - glyph_origin;
        let gy = local_y - glyph_origin;

        if gx >= 0 && gy >= 0 {
            let (row, col) = ((gy / glyph_cell) as usize, (gx / glyph_cell) as usize);
            if glyph_bit(piece.kind, row, col) {
                return palette.piece_mark(piece.side);
            }
        }
    }

    palette.piece_fill(piece.side)
}
