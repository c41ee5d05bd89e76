//! Bishop move generation.

use crate::board::piece::PieceRecord;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::movegen::shared::push_ray_moves;

pub(crate) const BISHOP_OFFSETS: [i16; 4] = [-11, -9, 9, 11];

pub(crate) fn generate(state: &GameState, bishop: &PieceRecord, moves: &mut Vec<Move>) {
    let Some(from) = bishop.square else { return };
    push_ray_moves(state, from, bishop.side, &BISHOP_OFFSETS, moves);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece::{Side, SlotRole, Wing};

    #[test]
    fn opening_bishop_is_boxed_in() {
        let state = GameState::new_game();
        let mut moves = Vec::new();
        generate(
            &state,
            state.roster(Side::Light).record(SlotRole::Bishop(Wing::Queenside)),
            &mut moves,
        );
        assert!(moves.is_empty());
    }

    #[test]
    fn ray_stops_at_first_blocker() {
        // Dark pawn on f6 blocks the long diagonal: g7 must be unreachable,
        // f6 itself is a capture.
        let state =
            GameState::from_fen("4k3/8/5p2/8/3B4/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = Vec::new();
        generate(
            &state,
            state.roster(Side::Light).record(SlotRole::Bishop(Wing::Queenside)),
            &mut moves,
        );
        let texts: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert!(texts.contains(&"d4e5".to_string()));
        assert!(texts.contains(&"d4f6".to_string()));
        assert!(!texts.contains(&"d4g7".to_string()));
    }

    #[test]
    fn friendly_blocker_square_is_excluded() {
        let state =
            GameState::from_fen("4k3/8/5P2/8/3B4/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = Vec::new();
        generate(
            &state,
            state.roster(Side::Light).record(SlotRole::Bishop(Wing::Queenside)),
            &mut moves,
        );
        let texts: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert!(texts.contains(&"d4e5".to_string()));
        assert!(!texts.contains(&"d4f6".to_string()));
    }
}
