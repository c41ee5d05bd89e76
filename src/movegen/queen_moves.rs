//! Queen move generation: the rook and bishop rays combined.

use crate::board::piece::PieceRecord;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::shared::push_ray_moves;

pub(crate) const QUEEN_OFFSETS: [i16; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

pub(crate) fn generate(state: &GameState, queen: &PieceRecord, moves: &mut Vec<Move>) {
    let Some(from) = queen.square else { return };
    push_ray_moves(state, from, queen.side, &QUEEN_OFFSETS, moves);
}
