use std::env;

use anyhow::Context;
use chess_board::{
    utils::{parse_move, random_playout, replay},
    Board,
};
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

const USAGE: &str = "usage: chess [--random STEPS [SEED]] [ROW,COL:ROW,COL ...]";

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let mut args = env::args().skip(1).peekable();
    let mut board = Board::default();

    if args.peek().map(String::as_str) == Some("--random") {
        args.next();
        let steps: usize = args
            .next()
            .context(USAGE)?
            .parse()
            .context("STEPS must be a number")?;
        let mut rng = match args.next_if(|arg| arg.parse::<u64>().is_ok()) {
            Some(seed) => StdRng::seed_from_u64(seed.parse()?),
            None => StdRng::from_entropy(),
        };
        let played = random_playout(&mut board, steps, &mut rng);
        info!("Played {played} random moves");
        if played < steps {
            warn!("No legal moves left after {played} steps");
        }
    }

    let moves = args
        .map(|arg| parse_move(&arg).with_context(|| format!("bad move {arg:?}\n{USAGE}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if moves.is_empty() {
        debug!("No moves given");
    } else {
        let report = replay(&mut board, &moves);
        println!("{report}");
    }
    print!("{board}");
    Ok(())
}
