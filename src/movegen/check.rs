//! Check detection.
//!
//! A side is in check when any of the opponent's pseudo-legal moves lands on
//! its king's square. Reusing the pseudo-legal generator instead of a
//! dedicated attack map is deliberately simple; the fixed board and sixteen
//! piece slots keep the cost negligible for interactive play.

use crate::board::piece::Side;
use crate::game::game_state::GameState;
use crate::movegen::pseudo_legal::generate_pseudo_legal_moves;

pub fn is_in_check(state: &GameState, side: Side) -> bool {
    let Some(king_sq) = state.roster(side).king_square() else {
        return false;
    };
    generate_pseudo_legal_moves(state, side.opposite())
        .iter()
        .any(|mv| mv.to == king_sq)
}
