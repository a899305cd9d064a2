use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::square::{BOARD_DIMENSION, Square};

/// Maps between pixel positions on the board surface and board squares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardGeometry {
    cell_size: u32,
}

impl BoardGeometry {
    /// `cell_size` is clamped to at least one pixel.
    #[must_use]
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    #[must_use]
    pub fn from_board_size(board_size: u32) -> Self {
        Self::new(board_size / BOARD_DIMENSION as u32)
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.cell_size * BOARD_DIMENSION as u32
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        let edge = self.board_size() as i32 - 1;

        PixelRect::new(Point { x: 0, y: 0 }, Point { x: edge, y: edge })
    }

    /// Returns the square under `point`, or `None` when the point lies off the board.
    #[must_use]
    pub fn square_at(&self, point: Point) -> Option<Square> {
        if point.x < 0 || point.y < 0 {
            return None;
        }

        let cell = self.cell_size as i64;
        let col = point.x as i64 / cell;
        let row = point.y as i64 / cell;

        Square::new(row, col).ok()
    }

    /// Top-left pixel of `square`.
    #[must_use]
    pub fn cell_origin(&self, square: Square) -> Point {
        Point {
            x: (square.col() as u32 * self.cell_size) as i32,
            y: (square.row() as u32 * self.cell_size) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(row: i64, col: i64) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_square_at_divides_by_cell_size() {
        let geometry = BoardGeometry::from_board_size(512);

        assert_eq!(geometry.cell_size(), 64);
        assert_eq!(geometry.square_at(Point { x: 0, y: 0 }), Some(square(0, 0)));
        assert_eq!(geometry.square_at(Point { x: 63, y: 63 }), Some(square(0, 0)));
        assert_eq!(geometry.square_at(Point { x: 64, y: 0 }), Some(square(0, 1)));
        assert_eq!(geometry.square_at(Point { x: 4 * 64 + 10, y: 6 * 64 + 10 }), Some(square(6, 4)));
        assert_eq!(geometry.square_at(Point { x: 511, y: 511 }), Some(square(7, 7)));
    }

    #[test]
    fn test_square_at_rejects_points_off_the_board() {
        let geometry = BoardGeometry::from_board_size(512);

        assert_eq!(geometry.square_at(Point { x: 512, y: 0 }), None);
        assert_eq!(geometry.square_at(Point { x: 0, y: 512 }), None);
        assert_eq!(geometry.square_at(Point { x: -1, y: 10 }), None);
        assert_eq!(geometry.square_at(Point { x: 10, y: -1 }), None);
        assert_eq!(geometry.square_at(Point { x: i32::MAX, y: i32::MAX }), None);
    }

    #[test]
    fn test_zero_cell_size_is_clamped() {
        let geometry = BoardGeometry::new(0);

        assert_eq!(geometry.cell_size(), 1);
        assert_eq!(geometry.square_at(Point { x: 7, y: 7 }), Some(square(7, 7)));
    }

    #[test]
    fn test_cell_origin_inverts_square_at() {
        let geometry = BoardGeometry::new(50);

        for sq in Square::all() {
            assert_eq!(geometry.square_at(geometry.cell_origin(sq)), Some(sq));
        }
    }

    #[test]
    fn test_pixel_rect_covers_whole_board() {
        let rect = BoardGeometry::new(10).pixel_rect().unwrap();

        assert_eq!(rect.width(), 80);
        assert_eq!(rect.height(), 80);
    }
}
