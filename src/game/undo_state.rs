//! Single-level undo support.
//!
//! Exactly one ply of history is retained: the last move, the captured piece
//! (cached with its pre-capture square so it can be restored into its stable
//! roster slot), and the mover's pre-move has-moved flag. After an undo the
//! cache is empty until another move is made.

use crate::board::grid::Cell;
use crate::board::piece::{PieceRecord, Side, SlotRole, Wing};
use crate::errors::RulesError;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub last_move: Move,
    pub captured: Option<PieceRecord>,
    pub prior_has_moved: bool,
}

impl GameState {
    /// Reverse the most recent move. Reports `NoMoveToUndo` when the cache is
    /// empty; the position is left untouched in that case.
    pub fn undo_last_move(&mut self) -> Result<(), RulesError> {
        let undo = self.undo.take().ok_or(RulesError::NoMoveToUndo)?;
        let Move { from, to } = undo.last_move;

        let mover = *self
            .record_at(to)
            .ok_or(RulesError::IllegalMove(undo.last_move))?;
        let side = mover.side;

        // A king returning two files was a castle; walk the rook home. The
        // castle preconditions guarantee the rook had never moved.
        if mover.role == SlotRole::King && from.file().abs_diff(to.file()) == 2 {
            let (wing, corner_delta, castled_delta) = if to.index() > from.index() {
                (Wing::Kingside, 3, 1)
            } else {
                (Wing::Queenside, -4, -1)
            };
            let corner = from.offset(corner_delta);
            let castled = from.offset(castled_delta);
            let rook = self.roster_mut(side).record_mut(SlotRole::Rook(wing));
            debug_assert_eq!(rook.square, Some(castled));
            rook.square = Some(corner);
            rook.has_moved = false;
            self.grid.set(castled, Cell::Empty);
            self.grid.set(corner, Cell::Occupied(side, SlotRole::Rook(wing).kind()));
        }

        // Walk the mover back and restore its pre-move flag.
        {
            let record = self.roster_mut(side).record_mut(mover.role);
            record.square = Some(from);
            record.has_moved = undo.prior_has_moved;
        }
        self.grid.set(to, Cell::Empty);
        self.grid.set(from, Cell::Occupied(side, mover.kind()));

        // Restore any captured piece into its stable slot, on its original
        // square, and give the material back.
        if let Some(captured) = undo.captured {
            self.roster_mut(captured.side).restore(captured);
            if let Some(sq) = captured.square {
                self.grid.set(sq, Cell::Occupied(captured.side, captured.kind()));
            }
            match captured.side {
                Side::Light => self.material += captured.value(),
                Side::Dark => self.material -= captured.value(),
            }
        }

        self.turn = self.turn.opposite();
        Ok(())
    }
}
