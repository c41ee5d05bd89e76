//! Helpers shared by the per-piece generators.

use crate::board::grid::Cell;
use crate::board::piece::Side;
use crate::board::square::Square;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;

/// Push one-step destinations for each offset: anything on the board that is
/// not occupied by a friendly piece. Used by knights and kings.
pub(crate) fn push_single_steps(
    state: &GameState,
    from: Square,
    side: Side,
    offsets: &[i16],
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        let dest = from.offset(offset);
        match state.grid.cell(dest) {
            Cell::OffBoard => {}
            Cell::Empty => moves.push(Move::new(from, dest)),
            Cell::Occupied(owner, _) => {
                if owner != side {
                    moves.push(Move::new(from, dest));
                }
            }
        }
    }
}

/// Walk each ray outward until the edge or the first occupied square,
/// including that square only when it holds an enemy piece. Used by the
/// sliding pieces.
pub(crate) fn push_ray_moves(
    state: &GameState,
    from: Square,
    side: Side,
    offsets: &[i16],
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        let mut dest = from;
        loop {
            dest = dest.offset(offset);
            match state.grid.cell(dest) {
                Cell::OffBoard => break,
                Cell::Empty => moves.push(Move::new(from, dest)),
                Cell::Occupied(owner, _) => {
                    if owner != side {
                        moves.push(Move::new(from, dest));
                    }
                    break;
                }
            }
        }
    }
}
