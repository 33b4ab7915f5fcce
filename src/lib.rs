pub mod core;
pub mod utils;

// module re-exports
pub use core::board::Board;
pub use core::coordinate::Coordinate;
pub use core::definitions::{BoardError, Cell, Figure, MoveError, MoveOutcome};
pub use core::engine::{Color, Piece, PieceId, PieceKind};
pub use core::game::SharedBoard;
