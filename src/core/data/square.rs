use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_DIMENSION: u8 = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("square ({row}, {col}) is outside the {dim}x{dim} board", dim = BOARD_DIMENSION)]
    OutOfBounds { row: i64, col: i64 },
}

/// A board cell. Row 0 is the top edge of the board (rank 8), column 0 the left edge (file a).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i64, col: i64) -> Result<Self, SquareError> {
        let dim = BOARD_DIMENSION as i64;

        if !(0..dim).contains(&row) || !(0..dim).contains(&col) {
            return Err(SquareError::OutOfBounds { row, col });
        }

        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[must_use]
    pub fn row(&self) -> u8 {
        self.row
    }

    #[must_use]
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Light squares are the ones whose row and column sum to an even number.
    #[must_use]
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_DIMENSION)
            .flat_map(|row| (0..BOARD_DIMENSION).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'0' + BOARD_DIMENSION - self.row) as char;
        write!(f, "{}{}", file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new_accepts_board_range() {
        let corner = Square::new(7, 7).unwrap();

        assert_eq!(corner.row(), 7);
        assert_eq!(corner.col(), 7);
        assert!(Square::new(0, 0).is_ok());
    }

    #[test]
    fn test_square_new_rejects_out_of_range() {
        assert_eq!(Square::new(8, 0), Err(SquareError::OutOfBounds { row: 8, col: 0 }));
        assert_eq!(Square::new(0, -1), Err(SquareError::OutOfBounds { row: 0, col: -1 }));
    }

    #[test]
    fn test_square_display_uses_algebraic_names() {
        assert_eq!(Square::new(6, 4).unwrap().to_string(), "e2");
        assert_eq!(Square::new(4, 4).unwrap().to_string(), "e4");
        assert_eq!(Square::new(0, 0).unwrap().to_string(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
    }

    #[test]
    fn test_top_left_square_is_light() {
        assert!(Square::new(0, 0).unwrap().is_light());
        assert!(!Square::new(0, 1).unwrap().is_light());
        assert!(Square::new(7, 7).unwrap().is_light());
    }

    #[test]
    fn test_all_visits_every_square_once() {
        let squares: Vec<Square> = Square::all().collect();

        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[63], Square::new(7, 7).unwrap());
    }
}
