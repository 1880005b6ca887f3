use buscaminas_core::{Board, GameConfig, MineGenerator, RandomMineGenerator};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn flood_fill_empty_board(c: &mut Criterion) {
    c.bench_function("flood_fill_200x200_no_mines", |b| {
        b.iter_batched(
            || Board::with_mines(200, 200, &[]).unwrap(),
            |mut board| {
                board.open_cell((0, 0)).unwrap();
                board
            },
            BatchSize::SmallInput,
        )
    });
}

fn generate_dense_board(c: &mut Criterion) {
    let config = GameConfig::new(200, 200, 8000).unwrap();
    c.bench_function("generate_200x200_8000_mines", |b| {
        b.iter(|| RandomMineGenerator::new(42).generate(&config).unwrap())
    });
}

criterion_group!(benches, flood_fill_empty_board, generate_dense_board);
criterion_main!(benches);
