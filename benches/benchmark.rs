use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sudoku_classic::{solver, SudokuGrid};
use sudoku_classic::generator::{Carver, Difficulty, Generator};

fn sample_puzzle() -> SudokuGrid {
    SudokuGrid::from_rows([
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9]
    ]).unwrap()
}

fn benchmark_solve(c: &mut Criterion) {
    let puzzle = sample_puzzle();

    c.bench_function("backtracking solve", |b| b.iter(|| {
        let mut grid = puzzle.clone();
        assert!(solver::solve(&mut grid));
        grid
    }));
}

fn benchmark_generate(c: &mut Criterion) {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));

    c.bench_function("generate full grid", |b|
        b.iter(|| generator.generate()));
}

fn benchmark_carve(c: &mut Criterion) {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
    let solution = generator.generate();
    let mut carver = Carver::new(ChaCha8Rng::seed_from_u64(43));

    c.bench_function("carve medium puzzle", |b|
        b.iter(|| carver.carve(&solution, Difficulty::Medium)));
}

criterion_group!(benches, benchmark_solve, benchmark_generate,
    benchmark_carve);
criterion_main!(benches);
