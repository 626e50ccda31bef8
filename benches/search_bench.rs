//! Benchmarks for move generation, evaluation, search, and full games.
//!
//! The per-position benchmarks run over a small corpus of openings and
//! early-midgame positions so the numbers do not overfit a single board.
//! Search benchmarks pin the standard seed-42 opening and clear caches
//! where a cold measurement is the point.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use treasure_duel::{
    evaluate, legal_moves, DuelConfig, DuelRunner, GameSetup, GameState, SearchConfig,
    SearchEngine,
};

/// Eight openings, each also stepped four plies in by a shallow engine.
fn corpus() -> Vec<GameState> {
    let setup = GameSetup::default();
    let mut engine = SearchEngine::new(SearchConfig::default().with_depth(2));
    let mut positions = Vec::new();

    for seed in 0..8 {
        engine.clear_cache();
        let mut state = setup.build(seed);
        positions.push(state.clone());
        for _ in 0..4 {
            let Some(dest) = engine.best_move(&state) else {
                break;
            };
            state = state.apply(dest);
            positions.push(state.clone());
        }
    }

    positions
}

fn bench_rules(c: &mut Criterion) {
    let positions = corpus();

    c.bench_function("rules/legal_moves_corpus", |b| {
        b.iter(|| {
            for state in &positions {
                black_box(legal_moves(black_box(state)));
            }
        })
    });

    c.bench_function("eval/evaluate_corpus", |b| {
        b.iter(|| {
            for state in &positions {
                black_box(evaluate(black_box(state)));
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let state = GameSetup::default().build(42);

    c.bench_function("search/best_move_cold", |b| {
        let mut engine = SearchEngine::new(SearchConfig::default().with_book(false));
        b.iter(|| {
            engine.clear_cache();
            black_box(engine.best_move(black_box(&state)))
        })
    });

    c.bench_function("search/alpha_beta_depth4", |b| {
        let mut engine = SearchEngine::new(SearchConfig::default().with_table(false));
        b.iter(|| black_box(engine.alpha_beta(black_box(&state), 4)))
    });

    c.bench_function("search/minimax_depth4", |b| {
        let mut engine = SearchEngine::new(SearchConfig::default().with_table(false));
        b.iter(|| black_box(engine.minimax(black_box(&state), 4)))
    });
}

fn bench_duel(c: &mut Criterion) {
    let state = GameSetup::default().build(42);

    c.bench_function("duel/full_game", |b| {
        let config = DuelConfig::new()
            .with_first(SearchConfig::default().with_depth(2))
            .with_second(SearchConfig::default().with_depth(2));
        let mut runner = DuelRunner::new(config);
        b.iter(|| black_box(runner.play(black_box(&state), 42)))
    });
}

criterion_group!(benches, bench_rules, bench_search, bench_duel);
criterion_main!(benches);
