use chess_board::{
    core::utils::between,
    utils::{random_playout, replay},
    Board, Coordinate,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn scenario_moves() -> Vec<(Coordinate, Coordinate)> {
    [
        ((7, 0), (3, 0)),
        ((7, 2), (5, 0)),
        ((0, 0), (5, 0)),
        ((0, 2), (2, 0)),
        ((0, 1), (2, 2)),
        ((3, 0), (3, 7)),
    ]
    .into_iter()
    .map(|((start_row, start_col), (end_row, end_col))| {
        (
            Coordinate::new(start_row, start_col),
            Coordinate::new(end_row, end_col),
        )
    })
    .collect()
}

fn played_board() -> Board {
    let mut board = Board::default();
    random_playout(&mut board, 40, &mut StdRng::seed_from_u64(3));
    board
}

fn utils_benchmark(c: &mut Criterion) {
    c.bench_function("between long diagonal", |b| {
        b.iter(|| {
            between(black_box(Coordinate::new(0, 0)), black_box(Coordinate::new(7, 7))).count()
        })
    });
    c.bench_function("check move", |b| {
        let board = Board::default();
        b.iter(|| {
            black_box(&board).check_move(Coordinate::new(0, 2), black_box(Coordinate::new(5, 7)))
        })
    });
    c.bench_function("replay scenario", |b| {
        let moves = scenario_moves();
        b.iter(|| replay(&mut Board::default(), black_box(&moves)))
    });
}

fn move_generation_benchmark(c: &mut Criterion) {
    c.bench_function("all moves - start", |b| {
        b.iter(|| black_box(Board::default()).all_moves())
    });
    c.bench_function("all moves - played", |b| {
        let board = played_board();
        b.iter(|| black_box(&board).all_moves())
    });
    c.bench_function("random playout 100", |b| {
        b.iter(|| {
            let mut board = Board::default();
            random_playout(&mut board, 100, &mut StdRng::seed_from_u64(black_box(11)))
        })
    });
    c.bench_function("snapshot round trip", |b| {
        let board = played_board();
        b.iter(|| Board::from_bytes(&black_box(&board).to_bytes().unwrap()).unwrap())
    });
}

criterion_group!(benches, utils_benchmark, move_generation_benchmark);
criterion_main!(benches);
