use crate::core::coordinate::Coordinate;

/// Squares strictly between two points on a line, walked from the start
/// toward the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Between {
    current: Coordinate,
    step: (i32, i32),
    remaining: usize,
}

impl Between {
    /** Path with no intermediate squares, e.g. for jumping pieces */
    pub fn empty(from: Coordinate) -> Between {
        Between {
            current: from,
            step: (0, 0),
            remaining: 0,
        }
    }
}

impl Iterator for Between {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.current.offset(self.step)?;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Between {}

pub fn between(from: Coordinate, to: Coordinate) -> Between {
    debug_assert!(
        is_in_straight_line(from, to) || is_in_diagonal_line(from, to),
        "Points can't form line to search between them!"
    );
    let Some((d_row, d_col)) = from.delta(to) else {
        return Between::empty(from);
    };
    let length = d_row.unsigned_abs().max(d_col.unsigned_abs()) as usize;
    Between {
        current: from,
        step: (d_row.signum(), d_col.signum()),
        remaining: length.saturating_sub(1),
    }
}

/// Same row or same column, distinct squares.
#[inline]
pub fn is_in_straight_line(a: Coordinate, b: Coordinate) -> bool {
    a.delta(b).is_some_and(|(d_row, d_col)| (d_row == 0) != (d_col == 0))
}

/// Same diagonal, distinct squares.
#[inline]
pub fn is_in_diagonal_line(a: Coordinate, b: Coordinate) -> bool {
    a.delta(b).is_some_and(|(d_row, d_col)| {
        d_row != 0 && d_row.unsigned_abs() == d_col.unsigned_abs()
    })
}

#[inline]
pub fn is_knight_jump(a: Coordinate, b: Coordinate) -> bool {
    a.delta(b).is_some_and(|(d_row, d_col)| {
        matches!(
            (d_row.unsigned_abs(), d_col.unsigned_abs()),
            (1, 2) | (2, 1)
        )
    })
}
