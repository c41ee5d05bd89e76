//! Legality filtering.
//!
//! Each pseudo-legal candidate is played out on a clone of the position and
//! kept only if the mover's king is not attacked afterwards. Simulating on a
//! copy keeps the caller's state untouched for the whole query, so there is
//! no mutate-then-revert window and no way for an unbalanced apply/undo pair
//! to leak a corrupted position. A clone per candidate is cheap at this board
//! size, and generation runs far more often than moves are committed.

use crate::board::piece::Side;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::check::is_in_check;
use crate::movegen::pseudo_legal::generate_pseudo_legal_moves;

/// Every move for `side` that does not leave its own king in check, in
/// generation order. Never fails; a side with no moves gets an empty list.
pub fn generate_legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    generate_pseudo_legal_moves(state, side)
        .into_iter()
        .filter(|&mv| {
            let mut probe = state.clone();
            match probe.apply_move(mv) {
                Ok(()) => !is_in_check(&probe, side),
                Err(_) => false,
            }
        })
        .collect()
}

/// Membership test against the legal move list.
pub fn is_move_legal(state: &GameState, mv: Move, side: Side) -> bool {
    generate_legal_moves(state, side).contains(&mv)
}
