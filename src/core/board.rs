use std::collections::HashSet;
use std::fmt::Display;

use log::{debug, trace};
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::coordinate::Coordinate;
use crate::core::definitions::{BoardError, MoveError, MoveOutcome};
use crate::core::engine::{Color, Piece, PieceId, PieceKind};

const BACK_RANK: [Option<PieceKind>; 8] = [
    Some(PieceKind::Rook),
    Some(PieceKind::Knight),
    Some(PieceKind::Bishop),
    None,
    None,
    Some(PieceKind::Bishop),
    Some(PieceKind::Knight),
    Some(PieceKind::Rook),
];

const BORDER: &str = "-----------------------------------------";

/// 8x8 grid owning every piece on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /** Starting layout: black back rank on row 0, white on row 7 */
    pub fn new() -> Board {
        let mut board = Board::empty();
        let mut next_id = 0;
        for (row, color) in [(0, Color::Black), (7, Color::White)] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let Some(kind) = kind else { continue };
                board.cells[row][col] = Some(Piece::new(
                    PieceId(next_id),
                    *kind,
                    color,
                    Coordinate::new(row as i32, col as i32),
                ));
                next_id += 1;
            }
        }
        board
    }

    pub fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Board holding exactly `pieces`, each on its own stored position.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut ids = HashSet::new();
        for piece in pieces {
            let pos = piece.position();
            if !pos.is_on_board() {
                return Err(BoardError::OffBoard(piece.id(), pos));
            }
            if !ids.insert(piece.id()) {
                return Err(BoardError::DuplicateId(piece.id()));
            }
            let (row, col) = pos.index();
            if board.cells[row][col].replace(piece).is_some() {
                return Err(BoardError::Occupied(pos));
            }
        }
        Ok(board)
    }

    /// Piece at `pos`, `None` for empty or off-board squares.
    pub fn get_piece(&self, pos: Coordinate) -> Option<&Piece> {
        if !pos.is_on_board() {
            return None;
        }
        let (row, col) = pos.index();
        self.cells[row][col].as_ref()
    }

    /// Live pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    /// Performs the move iff it is legal. Returns whether it happened; a
    /// rejected move leaves the board untouched.
    pub fn move_piece(&mut self, start_pos: Coordinate, end_pos: Coordinate) -> bool {
        self.try_move(start_pos, end_pos).is_ok()
    }

    /// Like [`Board::move_piece`] but reports why a move was rejected.
    pub fn try_move(
        &mut self,
        start_pos: Coordinate,
        end_pos: Coordinate,
    ) -> Result<MoveOutcome, MoveError> {
        self.check_move(start_pos, end_pos).inspect_err(|err| {
            debug!("Rejected move {start_pos} -> {end_pos}: {err}");
        })?;
        Ok(match self.commit(start_pos, end_pos) {
            Some(displaced) => MoveOutcome::Displaced(displaced),
            None => MoveOutcome::Quiet,
        })
    }

    /// Runs every check of a move without touching the board.
    pub fn check_move(
        &self,
        start_pos: Coordinate,
        end_pos: Coordinate,
    ) -> Result<MoveOutcome, MoveError> {
        for pos in [start_pos, end_pos] {
            if !pos.is_on_board() {
                return Err(MoveError::OutOfBounds(pos));
            }
        }
        let piece = self
            .get_piece(start_pos)
            .ok_or(MoveError::EmptySquare(start_pos))?;
        let mut path = piece
            .validate_move(end_pos)
            .ok_or(MoveError::InvalidPattern {
                kind: piece.kind(),
                start: start_pos,
                end: end_pos,
            })?;
        if let Some(blocker) = path.find(|pos| self.get_piece(*pos).is_some()) {
            return Err(MoveError::PathBlocked(blocker));
        }
        match self.get_piece(end_pos) {
            Some(target) if target.color() == piece.color() => {
                Err(MoveError::SelfCollision(end_pos))
            }
            Some(target) => Ok(MoveOutcome::Displaced(*target)),
            None => Ok(MoveOutcome::Quiet),
        }
    }

    /** Apply an already checked move. Returns whatever was on `end_pos`. */
    fn commit(&mut self, start_pos: Coordinate, end_pos: Coordinate) -> Option<Piece> {
        let (start_row, start_col) = start_pos.index();
        let (end_row, end_col) = end_pos.index();
        let mut piece = self.cells[start_row][start_col].take()?;
        piece.move_to(end_pos);
        trace!("Moved {piece:?} from {start_pos}");
        let displaced = self.cells[end_row][end_col].replace(piece);
        if let Some(displaced) = &displaced {
            debug!("{displaced} left the board");
        }
        displaced
    }

    /// Every destination the piece on `start_pos` may legally reach.
    pub fn possible_moves(&self, start_pos: Coordinate) -> Vec<Coordinate> {
        if self.get_piece(start_pos).is_none() {
            return Vec::new();
        }
        Coordinate::all()
            .filter(|end_pos| self.check_move(start_pos, *end_pos).is_ok())
            .collect()
    }

    /// Every legal `(start, end)` pair on the board, regardless of color.
    pub fn all_moves(&self) -> Vec<(Coordinate, Coordinate)> {
        self.pieces()
            .map(Piece::position)
            .flat_map(|start| {
                self.possible_moves(start)
                    .into_iter()
                    .map(move |end| (start, end))
            })
            .collect()
    }

    /// Commits one legal move chosen uniformly at random.
    pub fn random_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<(Coordinate, Coordinate)> {
        let (start_pos, end_pos) = self.all_moves().into_iter().choose(rng)?;
        self.try_move(start_pos, end_pos).ok()?;
        Some((start_pos, end_pos))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BoardError> {
        postcard::to_allocvec(self).map_err(BoardError::Encode)
    }

    /// Decodes a snapshot and rejects boards whose pieces disagree with
    /// the squares holding them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Board, BoardError> {
        let board: Board = postcard::from_bytes(bytes).map_err(BoardError::Decode)?;
        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<(), BoardError> {
        let mut ids = HashSet::new();
        for square in Coordinate::all() {
            let Some(piece) = self.get_piece(square) else {
                continue;
            };
            if piece.position() != square {
                return Err(BoardError::Misplaced {
                    id: piece.id(),
                    stored: piece.position(),
                    square,
                });
            }
            if !ids.insert(piece.id()) {
                return Err(BoardError::DuplicateId(piece.id()));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{BORDER}")?;
        for row in self.cells.iter() {
            write!(f, "|")?;
            for cell in row.iter() {
                match cell {
                    Some(piece) => write!(
                        f,
                        " {}{} |",
                        piece.color().label(),
                        piece.kind().label()
                    )?,
                    None => write!(f, "    |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        Ok(())
    }
}
