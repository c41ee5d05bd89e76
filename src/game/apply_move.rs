//! Move execution.
//!
//! `apply_move` trusts that its argument was validated by the legality
//! filter (or an equivalent membership check): it performs no independent
//! legality validation. The only defensive guard is the mover lookup; an
//! arbitrary origin square with no piece on it is rejected instead of
//! corrupting the position.

use crate::board::grid::Cell;
use crate::board::piece::{Side, SlotRole, Wing};
use crate::errors::RulesError;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;
use crate::game::undo_state::UndoState;

impl GameState {
    /// Execute `mv`: relocate the mover (and the wing rook when castling),
    /// capture whatever piece sits on the destination, flip the side to
    /// move, and arm the single-level undo cache.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), RulesError> {
        let Move { from, to } = mv;

        let mover = *self.record_at(from).ok_or(RulesError::IllegalMove(mv))?;
        let side = mover.side;
        debug_assert!(!self.grid.is_off_board(to));
        debug_assert!(!self.grid.cell(to).is_friendly(side));

        // A king stepping two files is a castle; drag the wing rook along.
        if mover.role == SlotRole::King && from.file().abs_diff(to.file()) == 2 {
            let (wing, corner_delta, castled_delta) = if to.index() > from.index() {
                (Wing::Kingside, 3, 1)
            } else {
                (Wing::Queenside, -4, -1)
            };
            let corner = from.offset(corner_delta);
            let castled = from.offset(castled_delta);
            let rook = self.roster_mut(side).record_mut(SlotRole::Rook(wing));
            debug_assert_eq!(rook.square, Some(corner));
            rook.square = Some(castled);
            rook.has_moved = true;
            self.grid.set(corner, Cell::Empty);
            self.grid.set(castled, Cell::Occupied(side, SlotRole::Rook(wing).kind()));
        }

        // Capture: any piece other than the mover whose square is the
        // destination. The mover is still on `from`, so it never matches.
        let mut captured = None;
        for scan_side in [Side::Light, Side::Dark] {
            if let Some(victim) = self.roster_mut(scan_side).record_at_mut(to) {
                let record = *victim;
                victim.square = None;
                captured = Some(record);
            }
        }
        if let Some(record) = captured {
            match record.side {
                Side::Light => self.material -= record.value(),
                Side::Dark => self.material += record.value(),
            }
        }

        // Relocate the mover, caching its pre-move flag for undo.
        let prior_has_moved = mover.has_moved;
        {
            let record = self.roster_mut(side).record_mut(mover.role);
            record.square = Some(to);
            record.has_moved = true;
        }
        self.grid.set(from, Cell::Empty);
        self.grid.set(to, Cell::Occupied(side, mover.kind()));

        self.turn = self.turn.opposite();
        self.undo = Some(UndoState {
            last_move: mv,
            captured,
            prior_has_moved,
        });
        Ok(())
    }
}
