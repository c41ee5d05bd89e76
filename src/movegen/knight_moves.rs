//! Knight move generation.

use crate::board::piece::PieceRecord;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::shared::push_single_steps;

/// The eight L-shaped deltas on the padded board.
pub(crate) const KNIGHT_OFFSETS: [i16; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];

pub(crate) fn generate(state: &GameState, knight: &PieceRecord, moves: &mut Vec<Move>) {
    let Some(from) = knight.square else { return };
    push_single_steps(state, from, knight.side, &KNIGHT_OFFSETS, moves);
}
