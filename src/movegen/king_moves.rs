//! King move generation, including castling candidates.
//!
//! A castle is offered when the king has never moved and the wing's rook has
//! never moved, still stands on its original corner, and every square between
//! the two is empty. Whether the king crosses an attacked square is NOT
//! examined here; that gap is part of the rule set this engine implements.
//! Like every other generated move, a castle that leaves the king in check is
//! removed by the legality filter.

use crate::board::grid::Cell;
use crate::board::piece::{PieceRecord, SlotRole, Wing};
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::shared::push_single_steps;

pub(crate) const KING_OFFSETS: [i16; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

pub(crate) fn generate(state: &GameState, king: &PieceRecord, moves: &mut Vec<Move>) {
    let Some(from) = king.square else { return };
    push_single_steps(state, from, king.side, &KING_OFFSETS, moves);

    if king.has_moved {
        return;
    }
    for wing in [Wing::Queenside, Wing::Kingside] {
        let (corner_delta, between_deltas): (i16, &[i16]) = match wing {
            Wing::Queenside => (-4, &[-1, -2, -3]),
            Wing::Kingside => (3, &[1, 2]),
        };
        let rook = state.roster(king.side).record(SlotRole::Rook(wing));
        if rook.has_moved || rook.square != Some(from.offset(corner_delta)) {
            continue;
        }
        let path_clear = between_deltas
            .iter()
            .all(|&d| state.grid.cell(from.offset(d)) == Cell::Empty);
        if path_clear {
            let castle_delta = match wing {
                Wing::Queenside => -2,
                Wing::Kingside => 2,
            };
            moves.push(Move::new(from, from.offset(castle_delta)));
        }
    }
}
