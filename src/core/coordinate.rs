use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// A `(row, col)` square. Off-board values are representable; consumers
/// decide whether to accept them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate { row, col }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.col
    }

    #[inline]
    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// `(Δrow, Δcol)` from `self` to `other`, or `None` if either component
    /// doesn't fit in an `i32`.
    #[inline]
    pub fn delta(&self, other: Coordinate) -> Option<(i32, i32)> {
        Some((
            other.row.checked_sub(self.row)?,
            other.col.checked_sub(self.col)?,
        ))
    }

    #[inline]
    pub fn offset(&self, (row, col): (i32, i32)) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.row.checked_add(row)?,
            self.col.checked_add(col)?,
        ))
    }

    /// Every on-board square, row-major.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }

    /** Grid index, only meaningful for on-board squares */
    #[inline]
    pub(crate) fn index(&self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate::new(row, col)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseCoordinateError {
    input: String,
}

impl ParseCoordinateError {
    pub(crate) fn new(input: &str) -> Self {
        ParseCoordinateError {
            input: input.to_owned(),
        }
    }
}

impl Display for ParseCoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "can't read coordinates from {:?}", self.input)
    }
}

impl std::error::Error for ParseCoordinateError {}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError::new(s);
        let (row, col) = s.trim().split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Coordinate::new(row, col))
    }
}
