//! Benchmarks for mini chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mini_chess::board::{Position, SearchConfig, SearchEngine};

const MIDDLEGAME: &str = "n1kn/pp1p/2p1/1b2/4/1NP1/PP1P/1BKN w";
const ENDGAME: &str = "k3/4/4/2b1/4/1N2/4/3K w";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Position::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut middlegame = Position::from_layout(MIDDLEGAME);
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middlegame.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middlegame = Position::from_layout(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut pos = Position::new();
                SearchEngine::new(SearchConfig::default().depth(depth)).search(&mut pos)
            })
        });
    }

    for depth in [3, 4] {
        group.bench_with_input(BenchmarkId::new("unpruned", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut pos = Position::new();
                let config = SearchConfig::default().depth(depth).with_pruning(false);
                SearchEngine::new(config).search(&mut pos)
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", "nbkn/pppp/4/4/4/4/PPPP/NBKN w"),
        ("middlegame", MIDDLEGAME),
        ("endgame", ENDGAME),
    ];

    for (name, layout) in positions {
        let mut pos = Position::from_layout(layout);
        group.bench_function(BenchmarkId::new("position", name), |b| {
            b.iter(|| black_box(pos.evaluate()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
