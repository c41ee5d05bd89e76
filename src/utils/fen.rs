//! FEN parsing and generation for the sixteen-slot roster model.
//!
//! Placement maps pieces onto the fixed roster slots in scan order (rank 8
//! to rank 1, file a to file h), so a side's first rook lands in the
//! queenside slot and the second in the kingside slot. Positions that exceed
//! a side's slot capacity (a third rook, a second queen, a ninth pawn) are
//! rejected; the roster model has nowhere to put promoted material. The
//! castling-rights field and the pawn ranks reconstruct the has-moved flags.
//! En passant targets and the move clocks have no counterpart state and are
//! accepted but ignored.

use crate::board::grid::{Cell, Grid};
use crate::board::piece::{PieceKind, Side, SlotRole, Wing};
use crate::board::roster::Roster;
use crate::board::square::Square;
use crate::errors::RulesError;
use crate::game::game_state::GameState;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const PAWN_ROLES: [SlotRole; 8] = [
    SlotRole::Pawn(0),
    SlotRole::Pawn(1),
    SlotRole::Pawn(2),
    SlotRole::Pawn(3),
    SlotRole::Pawn(4),
    SlotRole::Pawn(5),
    SlotRole::Pawn(6),
    SlotRole::Pawn(7),
];

/// Place one parsed piece into the first free slot of its kind.
fn assign_slot(roster: &mut Roster, kind: PieceKind, sq: Square) -> Result<(), RulesError> {
    let candidates: &[SlotRole] = match kind {
        PieceKind::King => &[SlotRole::King],
        PieceKind::Queen => &[SlotRole::Queen],
        PieceKind::Rook => &[
            SlotRole::Rook(Wing::Queenside),
            SlotRole::Rook(Wing::Kingside),
        ],
        PieceKind::Bishop => &[
            SlotRole::Bishop(Wing::Queenside),
            SlotRole::Bishop(Wing::Kingside),
        ],
        PieceKind::Knight => &[
            SlotRole::Knight(Wing::Queenside),
            SlotRole::Knight(Wing::Kingside),
        ],
        PieceKind::Pawn => &PAWN_ROLES,
    };
    for &role in candidates {
        if roster.record(role).square.is_none() {
            roster.record_mut(role).square = Some(sq);
            return Ok(());
        }
    }
    Err(RulesError::InvalidFen(format!(
        "no free roster slot for an extra {kind:?}"
    )))
}

pub fn parse_fen(fen: &str) -> Result<GameState, RulesError> {
    let mut fields = fen.split_ascii_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| RulesError::InvalidFen(fen.to_string()))?;
    let turn_field = fields
        .next()
        .ok_or_else(|| RulesError::InvalidFen(fen.to_string()))?;
    let castling_field = fields.next().unwrap_or("-");
    // En passant target and clocks, when present, are ignored.

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(RulesError::InvalidFen(fen.to_string()));
    }

    let mut light = Roster::empty(Side::Light);
    let mut dark = Roster::empty(Side::Dark);

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
            } else {
                let (side, kind) = PieceKind::from_fen_char(c)
                    .ok_or_else(|| RulesError::InvalidFen(fen.to_string()))?;
                if file >= 8 {
                    return Err(RulesError::InvalidFen(fen.to_string()));
                }
                let sq = Square::from_file_rank(file, rank);
                let roster = match side {
                    Side::Light => &mut light,
                    Side::Dark => &mut dark,
                };
                assign_slot(roster, kind, sq)?;
                file += 1;
            }
        }
        if file != 8 {
            return Err(RulesError::InvalidFen(fen.to_string()));
        }
    }

    if light.king_square().is_none() || dark.king_square().is_none() {
        return Err(RulesError::InvalidFen(format!("missing king: {fen}")));
    }

    let turn = match turn_field {
        "w" => Side::Light,
        "b" => Side::Dark,
        _ => return Err(RulesError::InvalidFen(fen.to_string())),
    };

    // Reconstruct has-moved flags. Castling rights vouch for the king and
    // the named rook; a pawn off its home rank has necessarily moved.
    for (roster, kingside, queenside) in [
        (&mut light, 'K', 'Q'),
        (&mut dark, 'k', 'q'),
    ] {
        let can_kingside = castling_field.contains(kingside);
        let can_queenside = castling_field.contains(queenside);
        roster.record_mut(SlotRole::Rook(Wing::Kingside)).has_moved = !can_kingside;
        roster.record_mut(SlotRole::Rook(Wing::Queenside)).has_moved = !can_queenside;
        roster.record_mut(SlotRole::King).has_moved = !(can_kingside || can_queenside);

        let home_rank = roster.side.pawn_home_rank();
        for &role in &PAWN_ROLES {
            let record = roster.record_mut(role);
            if let Some(sq) = record.square {
                record.has_moved = sq.rank() != home_rank;
            }
        }
    }

    let grid = Grid::rebuild(&light, &dark);
    let mut state = GameState {
        grid,
        light,
        dark,
        turn,
        material: 0,
        undo: None,
        scored_moves: Vec::new(),
    };
    state.material = state.recomputed_material();
    Ok(state)
}

pub fn generate_fen(state: &GameState) -> String {
    let mut out = String::new();

    for rank in (1..=8u8).rev() {
        let mut empties = 0;
        for file in 0..8u8 {
            match state.grid.cell(Square::from_file_rank(file, rank)) {
                Cell::Empty => empties += 1,
                Cell::Occupied(side, kind) => {
                    if empties > 0 {
                        out.push(char::from(b'0' + empties));
                        empties = 0;
                    }
                    out.push(kind.fen_char(side));
                }
                Cell::OffBoard => unreachable!("playable coordinates only"),
            }
        }
        if empties > 0 {
            out.push(char::from(b'0' + empties));
        }
        if rank > 1 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match state.turn {
        Side::Light => 'w',
        Side::Dark => 'b',
    });
    out.push(' ');
    out.push_str(&castling_rights(state));
    out.push_str(" - 0 1");
    out
}

/// Rights exist only while the king and the wing rook are unmoved on their
/// original squares.
fn castling_rights(state: &GameState) -> String {
    let mut rights = String::new();
    for side in [Side::Light, Side::Dark] {
        let roster = state.roster(side);
        let king = roster.record(SlotRole::King);
        let king_home = Square::from_file_rank(4, side.back_rank());
        let king_eligible = !king.has_moved && king.square == Some(king_home);
        for (wing, corner_file, letter) in
            [(Wing::Kingside, 7, 'k'), (Wing::Queenside, 0, 'q')]
        {
            let rook = roster.record(SlotRole::Rook(wing));
            let corner = Square::from_file_rank(corner_file, side.back_rank());
            if king_eligible && !rook.has_moved && rook.square == Some(corner) {
                rights.push(match side {
                    Side::Light => letter.to_ascii_uppercase(),
                    Side::Dark => letter,
                });
            }
        }
    }
    if rights.is_empty() {
        rights.push('-');
    }
    rights
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starting_fen_matches_new_game() {
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).unwrap();
        let fresh = GameState::new_game();
        assert_eq!(parsed.grid, fresh.grid);
        assert_eq!(parsed.light, fresh.light);
        assert_eq!(parsed.dark, fresh.dark);
        assert_eq!(parsed.turn, fresh.turn);
        assert_eq!(parsed.material, 0);
    }

    #[test]
    fn starting_fen_round_trips() {
        let state = GameState::new_game();
        assert_eq!(state.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_tracks_applied_moves() {
        let mut state = GameState::new_game();
        state
            .apply_move(crate::game::chess_move::Move::from_coordinate("e2e4").unwrap())
            .unwrap();
        assert_eq!(
            state.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn loaded_position_seeds_material() {
        // Light is a rook up and a pawn down.
        let state = GameState::from_fen("4k3/pp6/8/8/8/8/P7/R3K3 w - - 0 1").unwrap();
        assert_eq!(state.material, 540 - 100);
    }

    #[test]
    fn scan_order_fills_wing_slots() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(
            state
                .light
                .record(SlotRole::Rook(Wing::Queenside))
                .square
                .unwrap()
                .to_algebraic()
                .unwrap(),
            "a1"
        );
        assert_eq!(
            state
                .dark
                .record(SlotRole::Rook(Wing::Kingside))
                .square
                .unwrap()
                .to_algebraic()
                .unwrap(),
            "h8"
        );
    }

    #[test]
    fn pawn_flags_follow_their_rank() {
        let state = GameState::from_fen("4k3/8/4p3/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert!(!state.light.record(SlotRole::Pawn(0)).has_moved);
        assert!(state.dark.record(SlotRole::Pawn(0)).has_moved);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        // Missing a king.
        assert!(GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        // A ninth file on one rank.
        assert!(GameState::from_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").is_err());
        // Unknown piece letter.
        assert!(GameState::from_fen("rnbqkbnx/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").is_err());
        // Bad side-to-move field.
        assert!(GameState::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        // Too few ranks.
        assert!(GameState::from_fen("8/8/8/8/4k3/4K3 w - - 0 1").is_err());
    }

    #[test]
    fn promoted_material_does_not_fit_the_roster() {
        // Three rooks on one side exceed the two rook slots.
        assert!(GameState::from_fen("4k3/8/8/8/8/8/8/RR1RK3 w - - 0 1").is_err());
        // A second queen as well.
        assert!(GameState::from_fen("4k3/8/8/8/8/8/8/QQ2K3 w - - 0 1").is_err());
    }
}
