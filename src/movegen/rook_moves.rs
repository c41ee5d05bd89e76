//! Rook move generation.

use crate::board::piece::PieceRecord;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::shared::push_ray_moves;

pub(crate) const ROOK_OFFSETS: [i16; 4] = [-10, -1, 1, 10];

pub(crate) fn generate(state: &GameState, rook: &PieceRecord, moves: &mut Vec<Move>) {
    let Some(from) = rook.square else { return };
    push_ray_moves(state, from, rook.side, &ROOK_OFFSETS, moves);
}
