//! Pawn move generation.
//!
//! Pushes into empty squares only; the double push requires an unmoved pawn
//! and is considered only when the single push is open, so both intervening
//! squares are implied empty. Diagonal steps are captures only. En passant is
//! not part of the rule set.

use crate::board::grid::Cell;
use crate::board::piece::{PieceRecord, Side};
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;

/// Padded-board delta that advances a pawn of `side` by one rank.
#[inline]
pub(crate) const fn advance_delta(side: Side) -> i16 {
    match side {
        Side::Light => -10,
        Side::Dark => 10,
    }
}

pub(crate) fn generate(state: &GameState, pawn: &PieceRecord, moves: &mut Vec<Move>) {
    let Some(from) = pawn.square else { return };
    let side = pawn.side;
    let forward = advance_delta(side);

    // Forward pushes.
    let single = from.offset(forward);
    if state.grid.cell(single) == Cell::Empty {
        moves.push(Move::new(from, single));

        if !pawn.has_moved {
            let double = from.offset(2 * forward);
            if state.grid.cell(double) == Cell::Empty {
                moves.push(Move::new(from, double));
            }
        }
    }

    // Diagonal captures.
    for capture_delta in [forward - 1, forward + 1] {
        let dest = from.offset(capture_delta);
        if state.grid.cell(dest).is_enemy(side) {
            moves.push(Move::new(from, dest));
        }
    }
}
