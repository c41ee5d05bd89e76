use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use quince_chess::board::piece::Side;
use quince_chess::game::chess_move::Move;
use quince_chess::game::game_state::GameState;
use quince_chess::movegen::legal::generate_legal_moves;

const MIDGAME_FEN: &str =
    "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1";

fn bench_movegen(c: &mut Criterion) {
    let opening = GameState::new_game();
    // Correctness guard before benchmarking.
    assert_eq!(generate_legal_moves(&opening, Side::Light).len(), 20);

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| generate_legal_moves(black_box(&opening), Side::Light).len())
    });

    let midgame = GameState::from_fen(MIDGAME_FEN).expect("benchmark FEN should parse");
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| generate_legal_moves(black_box(&midgame), Side::Light).len())
    });

    let mv = Move::from_coordinate("e2e4").expect("fixed move should parse");
    c.bench_function("apply_undo_cycle", |b| {
        b.iter(|| {
            let mut probe = opening.clone();
            probe.apply_move(black_box(mv)).expect("move applies");
            probe.undo_last_move().expect("undo succeeds");
            probe
        })
    });
}

criterion_group!(movegen_benches, bench_movegen);
criterion_main!(movegen_benches);
