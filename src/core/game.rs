use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::board::Board;
use crate::core::coordinate::Coordinate;
use crate::core::definitions::{MoveError, MoveOutcome};
use crate::core::engine::Piece;

/// Board shared between threads. Every call holds the lock for the whole
/// check-and-commit sequence, so no other caller can slip a move in between.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    board: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        SharedBoard {
            board: Arc::new(Mutex::new(board)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        // commit can't fail halfway, so a poisoned board is still consistent
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn move_piece(&self, start_pos: Coordinate, end_pos: Coordinate) -> bool {
        self.lock().move_piece(start_pos, end_pos)
    }

    pub fn try_move(
        &self,
        start_pos: Coordinate,
        end_pos: Coordinate,
    ) -> Result<MoveOutcome, MoveError> {
        self.lock().try_move(start_pos, end_pos)
    }

    pub fn get_piece(&self, pos: Coordinate) -> Option<Piece> {
        self.lock().get_piece(pos).copied()
    }

    /** Copy of the current board */
    pub fn snapshot(&self) -> Board {
        self.lock().clone()
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
