//! Self-play demonstration binary.
//!
//! Plays a bounded number of random-engine plies from the opening position,
//! then prints the board, the static score, the check status of both sides,
//! and a record of the game. Exercises the full public surface of the rules
//! engine without any interactive machinery.

use quince_chess::board::piece::Side;
use quince_chess::engines::engine_random::RandomEngine;
use quince_chess::engines::engine_trait::Engine;
use quince_chess::errors::RulesError;
use quince_chess::eval::evaluate::{evaluate, evaluate_all_moves};
use quince_chess::game::game_state::GameState;
use quince_chess::movegen::check::is_in_check;
use quince_chess::utils::debug_dump::format_move_scores;
use quince_chess::utils::game_log::write_game_record;
use quince_chess::utils::render_board::render_board;

const DEMO_PLIES: usize = 40;

fn main() -> Result<(), RulesError> {
    let mut state = GameState::new_game();
    let mut engine = RandomEngine::new();
    let mut history = Vec::new();

    for _ in 0..DEMO_PLIES {
        let output = engine.choose_move(&state)?;
        let Some(mv) = output.best_move else {
            println!("no legal moves for {:?}; stopping", state.turn);
            break;
        };
        state.apply_move(mv)?;
        history.push(mv);
    }

    println!("{}", render_board(&state));
    println!();
    println!("position: {}", state.get_fen());
    println!("score: {}", evaluate(&state));
    for side in [Side::Light, Side::Dark] {
        if is_in_check(&state, side) {
            println!("{side:?} is in check");
        }
    }

    let turn = state.turn;
    let scored = evaluate_all_moves(&mut state, turn)?;
    println!();
    println!("move scores for {:?}:", state.turn);
    print!("{}", format_move_scores(&scored));

    println!();
    print!("{}", write_game_record(&history, "*"));
    Ok(())
}
