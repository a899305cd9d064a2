use owlchess::{Board, Cell, Color, Coord, File, Rank};

use crate::core::data::board_snapshot::BoardSnapshot;
use crate::core::data::piece::{Piece, PieceKind, Side};
use crate::core::data::square::{Square, SquareError};

// owlchess numbers ranks from the top (rank 8 has index 0), which matches our row order.

pub fn square_to_coord(square: Square) -> Coord {
    Coord::from_parts(
        File::from_index(square.col() as usize),
        Rank::from_index(square.row() as usize),
    )
}

pub fn coord_to_square(coord: Coord) -> Result<Square, SquareError> {
    Square::new(coord.rank().index() as i64, coord.file().index() as i64)
}

pub fn side_from_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

pub fn piece_from_cell(cell: Cell) -> Option<Piece> {
    let side = side_from_color(cell.color()?);
    let kind = match cell.piece()? {
        owlchess::Piece::Pawn => PieceKind::Pawn,
        owlchess::Piece::Knight => PieceKind::Knight,
        owlchess::Piece::Bishop => PieceKind::Bishop,
        owlchess::Piece::Rook => PieceKind::Rook,
        owlchess::Piece::Queen => PieceKind::Queen,
        owlchess::Piece::King => PieceKind::King,
    };

    Some(Piece::new(side, kind))
}

pub fn snapshot(board: &Board) -> BoardSnapshot {
    let mut snapshot = BoardSnapshot::empty(side_from_color(board.side()));

    for square in Square::all() {
        snapshot.put(square, piece_from_cell(board.get(square_to_coord(square))));
    }

    snapshot
}
