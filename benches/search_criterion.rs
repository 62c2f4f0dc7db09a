use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use quince_chess::game_state::game_state::GameState;
use quince_chess::moves::chess_move::Move;
use quince_chess::search::alpha_beta::{best_move, SearchConfig};
use quince_chess::search::board_scoring::{BoardScorer, MaterialScorer, StandardScorer};

fn open_game() -> GameState {
    let mut game = GameState::new_game();
    let opening = [
        Move::from_coords(6, 4, 4, 4),
        Move::from_coords(1, 4, 3, 4),
        Move::from_coords(7, 6, 5, 5),
        Move::from_coords(0, 1, 2, 2),
    ];
    for mv in opening {
        assert!(game.make_move(mv.from, mv.to), "bench opening move {mv} should be legal");
    }
    game
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let mut game = open_game();

    group.bench_function("standard", |b| b.iter(|| StandardScorer.score(black_box(&mut game))));
    group.bench_function("material", |b| b.iter(|| MaterialScorer.score(black_box(&mut game))));
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for depth in 1..=3u8 {
        let mut game = open_game();
        group.bench_with_input(BenchmarkId::new("standard", depth), &depth, |b, &depth| {
            b.iter(|| {
                let config = SearchConfig { depth };
                let result = best_move(black_box(&mut game), &StandardScorer, config);
                black_box(result.stats.nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_evaluation, bench_search);
criterion_main!(search_benches);
