use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_rules::core::{ActivePiece, Catalog, Engine, GameConfig, Grid};
use tetris_rules::types::{Coord, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = Engine::with_seed(GameConfig::default(), 12345).unwrap();
    state.start();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if !state.try_fall() && state.status().is_terminal() {
                state = Engine::with_seed(GameConfig::default(), 12345).unwrap();
                state.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(24, 10);
            // Fill bottom 4 rows
            for row in 20..24 {
                for col in 0..10 {
                    grid.set(Coord::new(row, col), Some(PieceKind::I));
                }
            }
            let full = grid.full_rows_in_range(black_box(20), black_box(23));
            grid.clear_rows(&full);
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = Engine::with_seed(GameConfig::default(), 12345).unwrap();
    state.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_next();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = Engine::with_seed(GameConfig::default(), 12345).unwrap();
    state.start();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !state.try_right() {
                while state.try_left() {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let catalog = Catalog::standard().unwrap();
    let grid = Grid::new(24, 10);
    let mut piece = ActivePiece::new(*catalog.get(PieceKind::T));

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(piece.rotate(&grid));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_rotate
);
criterion_main!(benches);
