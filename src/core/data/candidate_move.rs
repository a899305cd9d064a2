use std::fmt;
use crate::core::data::board_snapshot::BoardSnapshot;
use crate::core::data::piece::Piece;
use crate::core::data::square::Square;

/// An origin/destination pair proposed by the user, together with the board context it was built in.
///
/// Equality is structural over all four fields, so a candidate built from two clicks compares equal
/// to the legal move the engine reports for the same squares on the same board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    origin: Square,
    destination: Square,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl CandidateMove {
    #[must_use]
    pub fn new(origin: Square, destination: Square, board: &BoardSnapshot) -> Self {
        Self {
            origin,
            destination,
            moved: board.piece_at(origin),
            captured: board.piece_at(destination),
        }
    }

    #[must_use]
    pub fn origin(&self) -> Square {
        self.origin
    }

    #[must_use]
    pub fn destination(&self) -> Square {
        self.destination
    }

    #[must_use]
    pub fn moved(&self) -> Option<Piece> {
        self.moved
    }

    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)
    }
}
