//! Core position state.
//!
//! `GameState` holds the two rosters (the authoritative piece record), the
//! derived grid index, the side to move, the running material balance, the
//! single-level undo cache, and a display cache of the most recently scored
//! move list. It is mutated in place by move execution and undo; legality
//! filtering and move scanning simulate on clones instead of reverting the
//! shared state, so read-only queries never observe a half-applied move.

use crate::board::grid::{Cell, Grid};
use crate::board::piece::{PieceRecord, Side};
use crate::board::roster::Roster;
use crate::board::square::Square;
use crate::errors::RulesError;
use crate::game::chess_move::Move;
use crate::game::undo_state::UndoState;
use crate::utils::fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub light: Roster,
    pub dark: Roster,
    pub turn: Side,
    /// Material balance, light-positive, maintained incrementally by
    /// capture and undo.
    pub material: i32,
    /// Single-level undo cache; `None` means nothing to undo.
    pub undo: Option<UndoState>,
    /// Most recently scored move list. Display cache only, never consulted
    /// by the rules logic.
    pub scored_moves: Vec<(Move, i32)>,
}

impl GameState {
    /// Standard opening position, light to move.
    pub fn new_game() -> Self {
        let light = Roster::new_game(Side::Light);
        let dark = Roster::new_game(Side::Dark);
        let grid = Grid::rebuild(&light, &dark);
        GameState {
            grid,
            light,
            dark,
            turn: Side::Light,
            material: 0,
            undo: None,
            scored_moves: Vec::new(),
        }
    }

    pub fn from_fen(s: &str) -> Result<Self, RulesError> {
        fen::parse_fen(s)
    }

    pub fn get_fen(&self) -> String {
        fen::generate_fen(self)
    }

    #[inline]
    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::Light => &self.light,
            Side::Dark => &self.dark,
        }
    }

    #[inline]
    pub fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::Light => &mut self.light,
            Side::Dark => &mut self.dark,
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.grid.cell(sq)
    }

    /// Roster record of the live piece on `sq`, searching both sides.
    pub fn record_at(&self, sq: Square) -> Option<&PieceRecord> {
        self.light.record_at(sq).or_else(|| self.dark.record_at(sq))
    }

    /// The move that produced the current position, while it is still
    /// undoable.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.undo.as_ref().map(|u| u.last_move)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    /// Sync check between the derived grid and the authoritative rosters.
    /// Any divergence is a programming defect; tests assert on this after
    /// every mutation path.
    pub fn grid_matches_rosters(&self) -> bool {
        self.grid == Grid::rebuild(&self.light, &self.dark)
    }

    /// Signed sum of live piece values, light-positive. Used to seed the
    /// incremental balance when a position is loaded rather than played out.
    pub fn recomputed_material(&self) -> i32 {
        let mut total = 0;
        for record in self.light.records() {
            if record.is_alive() {
                total += record.value();
            }
        }
        for record in self.dark.records() {
            if record.is_alive() {
                total -= record.value();
            }
        }
        total
    }
}
