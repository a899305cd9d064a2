use std::fmt;
use crate::core::data::piece::{Piece, Side};
use crate::core::data::square::{BOARD_DIMENSION, Square};

const DIM: usize = BOARD_DIMENSION as usize;

/// Read-only copy of the engine's board, indexed by [`Square`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: [[Option<Piece>; DIM]; DIM],
    side_to_move: Side,
}

impl BoardSnapshot {
    #[must_use]
    pub fn empty(side_to_move: Side) -> Self {
        Self {
            cells: [[None; DIM]; DIM],
            side_to_move,
        }
    }

    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.put(square, Some(piece));
        self
    }

    pub fn put(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', |piece| piece.as_char()).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        Ok(())
    }
}
