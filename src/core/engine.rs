use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::core::coordinate::Coordinate;
use crate::core::utils::{
    between, is_in_diagonal_line, is_in_straight_line, is_knight_jump, Between,
};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /** One-letter code used by the text board */
    pub fn label(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Color::Black => "black",
            Color::White => "white",
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Bishop,
    Knight,
    Rook,
}

impl PieceKind {
    /** One-letter code used by the text board */
    pub fn label(self) -> char {
        match self {
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'K',
            PieceKind::Rook => 'R',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Rook => "Rook",
        })
    }
}

/// Identity of a piece, fixed when the board is set up.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    position: Coordinate,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, color: Color, position: Coordinate) -> Piece {
        Piece {
            id,
            kind,
            color,
            position,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /** Overwrite the stored position. Only the board's commit step calls this. */
    pub(crate) fn move_to(&mut self, new_pos: Coordinate) {
        self.position = new_pos;
    }

    /// Checks `end_pos` against this piece's movement pattern alone.
    ///
    /// Returns `None` when the pattern doesn't match (a move onto the current
    /// square never does). Otherwise returns the squares strictly between the
    /// current position and `end_pos` that must be empty for the move to go
    /// through; jumping pieces always get an empty path.
    pub fn validate_move(&self, end_pos: Coordinate) -> Option<Between> {
        let start = self.position;
        match self.kind {
            PieceKind::Bishop => {
                is_in_diagonal_line(start, end_pos).then(|| between(start, end_pos))
            }
            PieceKind::Rook => {
                is_in_straight_line(start, end_pos).then(|| between(start, end_pos))
            }
            PieceKind::Knight => is_knight_jump(start, end_pos).then(|| Between::empty(start)),
        }
    }
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Piece")
            .field("id", &self.id.0)
            .field("kind", &self.kind)
            .field("color", &self.color)
            .field("position", &self.position)
            .finish()
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.position)
    }
}
