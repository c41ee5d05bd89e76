//! Fixed sixteen-slot piece roster, one per side.
//!
//! The rosters are the authoritative record of where the pieces are; the grid
//! is a derived index over them. Captured pieces stay in their slot with
//! `square = None` so a later undo can restore them in place.

use crate::board::piece::{PieceRecord, Side, SlotRole};
use crate::board::square::Square;

/// Starting files of the back-rank roles, in slot order: king, queen,
/// queenside rook, kingside rook, bishops, knights.
const BACK_RANK_FILES: [u8; 8] = [4, 3, 0, 7, 2, 5, 1, 6];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub side: Side,
    records: [PieceRecord; 16],
}

impl Roster {
    /// Roster with all sixteen slots empty (no square assigned). Used by
    /// position parsing before placement is known.
    pub fn empty(side: Side) -> Self {
        Roster {
            side,
            records: std::array::from_fn(|slot| PieceRecord {
                role: SlotRole::from_slot(slot),
                side,
                square: None,
                has_moved: false,
            }),
        }
    }

    /// Roster in the standard opening arrangement for `side`.
    pub fn new_game(side: Side) -> Self {
        let mut roster = Roster::empty(side);
        for slot in 0..8 {
            let sq = Square::from_file_rank(BACK_RANK_FILES[slot], side.back_rank());
            roster.records[slot].square = Some(sq);
        }
        for file in 0..8 {
            let sq = Square::from_file_rank(file, side.pawn_home_rank());
            roster.records[SlotRole::Pawn(file).slot()].square = Some(sq);
        }
        roster
    }

    #[inline]
    pub fn record(&self, role: SlotRole) -> &PieceRecord {
        &self.records[role.slot()]
    }

    #[inline]
    pub fn record_mut(&mut self, role: SlotRole) -> &mut PieceRecord {
        &mut self.records[role.slot()]
    }

    /// All sixteen records in slot order.
    #[inline]
    pub fn records(&self) -> &[PieceRecord; 16] {
        &self.records
    }

    /// The live piece on `sq`, if any. Linear over sixteen fixed slots.
    pub fn record_at(&self, sq: Square) -> Option<&PieceRecord> {
        self.records.iter().find(|r| r.square == Some(sq))
    }

    pub fn record_at_mut(&mut self, sq: Square) -> Option<&mut PieceRecord> {
        self.records.iter_mut().find(|r| r.square == Some(sq))
    }

    /// Write a record back into its stable slot. Used to restore a captured
    /// piece during undo.
    #[inline]
    pub fn restore(&mut self, record: PieceRecord) {
        debug_assert_eq!(record.side, self.side);
        self.records[record.role.slot()] = record;
    }

    #[inline]
    pub fn king_square(&self) -> Option<Square> {
        self.record(SlotRole::King).square
    }
}
