//! Pseudo-legal move generation for one side.
//!
//! Walks the sixteen roster slots in their fixed order and dispatches to the
//! per-piece generators, ignoring whether a move exposes the mover's own
//! king. The output order (slot order, then offset order within a piece) is
//! deterministic so test runs are reproducible; nothing else depends on it.

use crate::board::piece::{PieceKind, Side};
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves,
};

pub fn generate_pseudo_legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for record in state.roster(side).records() {
        if !record.is_alive() {
            continue;
        }
        match record.kind() {
            PieceKind::King => king_moves::generate(state, record, &mut moves),
            PieceKind::Queen => queen_moves::generate(state, record, &mut moves),
            PieceKind::Rook => rook_moves::generate(state, record, &mut moves),
            PieceKind::Bishop => bishop_moves::generate(state, record, &mut moves),
            PieceKind::Knight => knight_moves::generate(state, record, &mut moves),
            PieceKind::Pawn => pawn_moves::generate(state, record, &mut moves),
        }
    }
    moves
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opening_position_has_twenty_pseudo_legal_moves() {
        let state = GameState::new_game();
        for side in [Side::Light, Side::Dark] {
            let moves = generate_pseudo_legal_moves(&state, side);
            assert_eq!(moves.len(), 20);
        }
    }

    #[test]
    fn generation_order_is_deterministic() {
        let state = GameState::new_game();
        let first = generate_pseudo_legal_moves(&state, Side::Light);
        let second = generate_pseudo_legal_moves(&state, Side::Light);
        assert_eq!(first, second);
    }

    #[test]
    fn captured_pieces_generate_nothing() {
        let mut state = GameState::new_game();
        // March the light e-pawn forward and let dark capture it.
        state.apply_move(Move::from_coordinate("e2e4").unwrap()).unwrap();
        state.apply_move(Move::from_coordinate("d7d5").unwrap()).unwrap();
        state.apply_move(Move::from_coordinate("e4d5").unwrap()).unwrap();

        let dark_moves = generate_pseudo_legal_moves(&state, Side::Dark);
        let d5 = crate::board::square::Square::from_algebraic("d5").unwrap();
        assert!(dark_moves.iter().all(|m| m.from != d5));
    }
}
