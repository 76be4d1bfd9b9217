//! rpgFEN throughput benchmarks.
//!
//! Run with: cargo bench --bench notation

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use column_chess::core::{BoardConfig, GameState};
use column_chess::notation::{decode, encode, load};
use column_chess::pieces::{PieceKindRegistry, PieceSpawner};

/// A full 16x16 board: every square holds a two-piece stack.
fn crowded_position() -> String {
    let rank = vec!["g+s"; 16].join(",");
    let ranks = vec![rank; 16].join("/");
    format!("0|\\{ranks}")
}

fn bench_decode(c: &mut Criterion) {
    let config = BoardConfig::default().with_origin(0, 14);
    let registry = PieceKindRegistry::standard();
    let text = crowded_position();

    c.bench_function("decode_crowded_16x16", |b| {
        b.iter(|| decode(black_box(&text), &config, &registry).unwrap());
    });
}

fn bench_encode(c: &mut Criterion) {
    let config = BoardConfig::default().with_origin(0, 14);
    let layout = decode(&crowded_position(), &config, &PieceKindRegistry::standard()).unwrap();

    c.bench_function("encode_crowded_16x16", |b| {
        b.iter(|| encode(black_box(&layout), &config).unwrap());
    });
}

fn bench_load(c: &mut Criterion) {
    let config = BoardConfig::default().with_origin(0, 14);
    let text = crowded_position();

    c.bench_function("load_crowded_16x16", |b| {
        b.iter(|| {
            let mut state = GameState::new(config);
            load(black_box(&text), &mut state, &mut PieceSpawner::standard()).unwrap();
            state
        });
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_load);
criterion_main!(benches);
