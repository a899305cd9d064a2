use crate::core::data::colour::Colour;
use crate::core::data::piece::{PieceKind, Side};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardPalette {
    pub light_square: Colour,
    pub dark_square: Colour,
    pub highlight: Colour,
    /// Share of `highlight` mixed into the selected square, out of 255.
    pub highlight_strength: u8,
    pub white_piece: Colour,
    pub black_piece: Colour,
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self {
            light_square: Colour::rgb(173, 216, 230),
            dark_square: Colour::rgb(255, 182, 193),
            highlight: Colour::rgb(255, 215, 0),
            highlight_strength: 140,
            white_piece: Colour::rgb(250, 248, 240),
            black_piece: Colour::rgb(40, 40, 48),
        }
    }
}

impl BoardPalette {
    #[must_use]
    pub fn piece_fill(&self, side: Side) -> Colour {
        match side {
            Side::White => self.white_piece,
            Side::Black => self.black_piece,
        }
    }

    /// Glyph colour, chosen to contrast with the piece fill.
    #[must_use]
    pub fn piece_mark(&self, side: Side) -> Colour {
        match side {
            Side::White => self.black_piece,
            Side::Black => self.white_piece,
        }
    }
}

pub const GLYPH_SIZE: usize = 5;

/// 5x5 bitmap letter for each piece kind, one row per byte, most significant of the low five bits
/// on the left.
#[must_use]
pub fn glyph(kind: PieceKind) -> [u8; GLYPH_SIZE] {
    match kind {
        PieceKind::Pawn => [0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        PieceKind::Knight => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001],
        PieceKind::Bishop => [0b11110, 0b10001, 0b11110, 0b10001, 0b11110],
        PieceKind::Rook => [0b11110, 0b10001, 0b11110, 0b10100, 0b10010],
        PieceKind::Queen => [0b01110, 0b10001, 0b10101, 0b10010, 0b01101],
        PieceKind::King => [0b10001, 0b10010, 0b11100, 0b10010, 0b10001],
    }
}

#[must_use]
pub fn glyph_bit(kind: PieceKind, row: usize, col: usize) -> bool {
    if row >= GLYPH_SIZE || col >= GLYPH_SIZE {
        return false;
    }

    glyph(kind)[row] & (1 << (GLYPH_SIZE - 1 - col)) != 0
}
