//! Static position evaluation.
//!
//! The score is the incrementally tracked material balance plus a positional
//! term from the piece-square tables, light-positive. Kings always take the
//! midgame table; bishops, knights, and pawns score only while they are on
//! the board; queens and rooks carry no positional term.

use crate::board::piece::{Side, SlotRole, Wing};
use crate::board::roster::Roster;
use crate::eval::tables::{
    positional_bonus, BISHOP_TABLE, KING_TABLE, KNIGHT_TABLE, PAWN_TABLE,
};
use crate::errors::RulesError;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::pseudo_legal::generate_pseudo_legal_moves;

fn positional_term(roster: &Roster) -> i32 {
    let side = roster.side;
    let mut term = 0;

    if let Some(sq) = roster.king_square() {
        term += positional_bonus(&KING_TABLE, side, sq);
    }

    // Queens and rooks go wherever they like.

    for wing in [Wing::Queenside, Wing::Kingside] {
        if let Some(sq) = roster.record(SlotRole::Bishop(wing)).square {
            term += positional_bonus(&BISHOP_TABLE, side, sq);
        }
        if let Some(sq) = roster.record(SlotRole::Knight(wing)).square {
            term += positional_bonus(&KNIGHT_TABLE, side, sq);
        }
    }

    for file in 0..8 {
        if let Some(sq) = roster.record(SlotRole::Pawn(file)).square {
            term += positional_bonus(&PAWN_TABLE, side, sq);
        }
    }

    term
}

/// Integer score of the position, positive when light is better.
pub fn evaluate(state: &GameState) -> i32 {
    state.material + positional_term(&state.light) - positional_term(&state.dark)
}

/// Score every pseudo-legal move of `side` one ply deep: simulate the move
/// on a clone, evaluate the result, record the pair. The list is also stored
/// in the state's display cache. This is a ranking aid for display, not a
/// search.
pub fn evaluate_all_moves(
    state: &mut GameState,
    side: Side,
) -> Result<Vec<(Move, i32)>, RulesError> {
    let mut scored = Vec::new();
    for mv in generate_pseudo_legal_moves(state, side) {
        let mut probe = state.clone();
        probe.apply_move(mv)?;
        scored.push((mv, evaluate(&probe)));
    }
    state.scored_moves = scored.clone();
    Ok(scored)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opening_position_evaluates_to_zero() {
        let state = GameState::new_game();
        assert_eq!(evaluate(&state), 0);
    }

    #[test]
    fn central_pawn_push_gains_fifty() {
        let mut state = GameState::new_game();
        state
            .apply_move(Move::from_coordinate("e2e4").unwrap())
            .unwrap();
        // e2 carries -25, e4 carries +25; no material change.
        assert_eq!(evaluate(&state), 50);
    }

    #[test]
    fn capture_swings_the_score_by_the_piece_value() {
        let mut state =
            GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let before = evaluate(&state);
        state
            .apply_move(Move::from_coordinate("e4d5").unwrap())
            .unwrap();
        let after = evaluate(&state);
        // A pawn came off for dark; the positional delta is the light pawn's
        // table change plus the dead pawn's forfeited bonus.
        assert!(after > before);
        assert_eq!(state.material, 100);
    }

    #[test]
    fn captured_minor_pieces_stop_scoring() {
        let mut state =
            GameState::from_fen("4k3/8/8/3n4/4P3/8/8/4K3 w - - 0 1").unwrap();
        state
            .apply_move(Move::from_coordinate("e4d5").unwrap())
            .unwrap();
        // With the knight gone, dark's positional term is the king table
        // alone; material registers the full knight.
        assert_eq!(state.material, 325);
        state.undo_last_move().unwrap();
        assert_eq!(state.material, 0);
    }

    #[test]
    fn move_scan_scores_every_pseudo_legal_move() {
        let mut state = GameState::new_game();
        let scored = evaluate_all_moves(&mut state, Side::Light).unwrap();
        assert_eq!(scored.len(), 20);
        assert_eq!(state.scored_moves, scored);

        let e2e4 = Move::from_coordinate("e2e4").unwrap();
        let (_, score) = scored.iter().find(|(mv, _)| *mv == e2e4).unwrap();
        assert_eq!(*score, 50);
    }

    #[test]
    fn move_scan_leaves_the_position_unchanged() {
        let mut state = GameState::new_game();
        let before = state.clone();
        evaluate_all_moves(&mut state, Side::Light).unwrap();
        assert_eq!(state.grid, before.grid);
        assert_eq!(state.light, before.light);
        assert_eq!(state.dark, before.dark);
        assert_eq!(state.turn, before.turn);
        assert_eq!(state.material, before.material);
    }
}
