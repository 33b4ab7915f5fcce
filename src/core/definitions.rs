use std::fmt::Display;

use crate::core::board::Board;
use crate::core::coordinate::Coordinate;
use crate::core::engine::{Color, Piece, PieceId, PieceKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub kind: PieceKind,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

/// Row-major view of the board for presentation layers.
pub fn ui_board(board: &Board) -> Vec<Vec<Cell>> {
    (0..8)
        .map(|row| {
            (0..8)
                .map(|col| match board.get_piece(Coordinate::new(row, col)) {
                    Some(piece) => Cell::Figure(Figure {
                        kind: piece.kind(),
                        color: piece.color(),
                    }),
                    None => Cell::Empty,
                })
                .collect()
        })
        .collect()
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /** destination was empty */
    Quiet,
    /** destination held an opposing piece, which left the board */
    Displaced(Piece),
}

/// Why a move was rejected. `Board::move_piece` folds all of these into `false`.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveError {
    OutOfBounds(Coordinate),
    EmptySquare(Coordinate),
    InvalidPattern {
        kind: PieceKind,
        start: Coordinate,
        end: Coordinate,
    },
    /** first occupied square on the path */
    PathBlocked(Coordinate),
    SelfCollision(Coordinate),
}

impl Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds(pos) => write!(f, "{pos} is off the board"),
            MoveError::EmptySquare(pos) => write!(f, "no piece at {pos}"),
            MoveError::InvalidPattern { kind, start, end } => {
                write!(f, "{kind} can't move from {start} to {end}")
            }
            MoveError::PathBlocked(pos) => write!(f, "path blocked at {pos}"),
            MoveError::SelfCollision(pos) => write!(f, "{pos} holds a piece of the same color"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Failure to build a board from pieces or from a snapshot.
#[derive(Debug)]
pub enum BoardError {
    Encode(postcard::Error),
    Decode(postcard::Error),
    OffBoard(PieceId, Coordinate),
    Occupied(Coordinate),
    DuplicateId(PieceId),
    /** stored position disagrees with the square holding the piece */
    Misplaced {
        id: PieceId,
        stored: Coordinate,
        square: Coordinate,
    },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::Encode(err) => write!(f, "failed to encode board: {err}"),
            BoardError::Decode(err) => write!(f, "failed to decode board: {err}"),
            BoardError::OffBoard(id, pos) => {
                write!(f, "piece {} placed off the board at {pos}", id.0)
            }
            BoardError::Occupied(pos) => write!(f, "two pieces placed on {pos}"),
            BoardError::DuplicateId(id) => write!(f, "piece id {} used twice", id.0),
            BoardError::Misplaced { id, stored, square } => write!(
                f,
                "piece {} thinks it is at {stored} but sits on {square}",
                id.0
            ),
        }
    }
}

impl std::error::Error for BoardError {}
