use std::fmt::Display;

use log::{debug, info};
use rand::Rng;

use crate::core::board::Board;
use crate::core::coordinate::{Coordinate, ParseCoordinateError};
use crate::core::definitions::{MoveError, MoveOutcome};

pub type MoveRequest = (Coordinate, Coordinate);

/// Parses `"row,col:row,col"`.
pub fn parse_move(text: &str) -> Result<MoveRequest, ParseCoordinateError> {
    let (start, end) = text
        .split_once(':')
        .ok_or_else(|| ParseCoordinateError::new(text))?;
    Ok((start.parse()?, end.parse()?))
}

#[derive(Debug, Default)]
pub struct ReplayReport {
    pub accepted: usize,
    pub rejected: usize,
    pub results: Vec<(MoveRequest, Result<MoveOutcome, MoveError>)>,
}

impl Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ((start, end), result) in self.results.iter() {
            match result {
                Ok(MoveOutcome::Quiet) => writeln!(f, "{start} -> {end}: ok")?,
                Ok(MoveOutcome::Displaced(piece)) => {
                    writeln!(f, "{start} -> {end}: ok, {} {} removed", piece.color(), piece.kind())?
                }
                Err(err) => writeln!(f, "{start} -> {end}: rejected, {err}")?,
            }
        }
        write!(f, "{} accepted, {} rejected", self.accepted, self.rejected)
    }
}

/// Applies `moves` in order; rejected moves are recorded and skipped.
pub fn replay(board: &mut Board, moves: &[MoveRequest]) -> ReplayReport {
    let mut report = ReplayReport::default();
    for &(start, end) in moves {
        let result = board.try_move(start, end);
        if result.is_ok() {
            report.accepted += 1;
        } else {
            report.rejected += 1;
        }
        report.results.push(((start, end), result));
    }
    info!(
        "Replayed {} moves: {} accepted, {} rejected",
        moves.len(),
        report.accepted,
        report.rejected
    );
    report
}

/// Plays up to `steps` random legal moves, stops early once nothing can move.
pub fn random_playout<R: Rng + ?Sized>(board: &mut Board, steps: usize, rng: &mut R) -> usize {
    for step in 0..steps {
        match board.random_move(rng) {
            Some((start, end)) => debug!("Random move {step}: {start} -> {end}"),
            None => return step,
        }
    }
    steps
}
