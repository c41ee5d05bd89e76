//! Piece, side, and roster-slot definitions.

use crate::board::square::Square;

/// One of the two players. Material and evaluation scores are
/// light-positive throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Rank the side's pawns start on.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Side::Light => 2,
            Side::Dark => 7,
        }
    }

    /// Rank the side's back-rank pieces start on.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::Light => 1,
            Side::Dark => 8,
        }
    }
}

/// The type of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Fixed material value. The king carries no material value; losing it
    /// ends the game rather than adjusting the balance.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 325,
            PieceKind::Bishop => 335,
            PieceKind::Rook => 540,
            PieceKind::Queen => 1050,
            PieceKind::King => 0,
        }
    }

    /// FEN letter for a piece of this kind owned by `side`.
    pub const fn fen_char(self, side: Side) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match side {
            Side::Light => c.to_ascii_uppercase(),
            Side::Dark => c,
        }
    }

    /// Inverse of [`PieceKind::fen_char`].
    pub fn from_fen_char(c: char) -> Option<(Side, PieceKind)> {
        let side = if c.is_ascii_uppercase() {
            Side::Light
        } else {
            Side::Dark
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((side, kind))
    }
}

/// Which half of the board a paired piece belongs to. Castling logic
/// addresses "the queenside rook" through this tag instead of a bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wing {
    Queenside,
    Kingside,
}

/// The role a roster slot plays. Roles are stable for the lifetime of a game:
/// a captured piece keeps its role so undo can restore it into the same slot.
/// The `Pawn` payload is the starting file (0 = a-file); pawns keep the tag
/// even after capturing onto another file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    King,
    Queen,
    Rook(Wing),
    Bishop(Wing),
    Knight(Wing),
    Pawn(u8),
}

impl SlotRole {
    /// Fixed role-to-slot mapping. Slot order doubles as the deterministic
    /// move-generation order.
    #[inline]
    pub const fn slot(self) -> usize {
        match self {
            SlotRole::King => 0,
            SlotRole::Queen => 1,
            SlotRole::Rook(Wing::Queenside) => 2,
            SlotRole::Rook(Wing::Kingside) => 3,
            SlotRole::Bishop(Wing::Queenside) => 4,
            SlotRole::Bishop(Wing::Kingside) => 5,
            SlotRole::Knight(Wing::Queenside) => 6,
            SlotRole::Knight(Wing::Kingside) => 7,
            SlotRole::Pawn(file) => 8 + file as usize,
        }
    }

    #[inline]
    pub const fn from_slot(slot: usize) -> SlotRole {
        match slot {
            0 => SlotRole::King,
            1 => SlotRole::Queen,
            2 => SlotRole::Rook(Wing::Queenside),
            3 => SlotRole::Rook(Wing::Kingside),
            4 => SlotRole::Bishop(Wing::Queenside),
            5 => SlotRole::Bishop(Wing::Kingside),
            6 => SlotRole::Knight(Wing::Queenside),
            7 => SlotRole::Knight(Wing::Kingside),
            _ => SlotRole::Pawn((slot - 8) as u8),
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            SlotRole::King => PieceKind::King,
            SlotRole::Queen => PieceKind::Queen,
            SlotRole::Rook(_) => PieceKind::Rook,
            SlotRole::Bishop(_) => PieceKind::Bishop,
            SlotRole::Knight(_) => PieceKind::Knight,
            SlotRole::Pawn(_) => PieceKind::Pawn,
        }
    }
}

/// A piece in a roster slot: its role, owner, current square (`None` once
/// captured), and whether it has ever moved. The has-moved flag gates
/// castling eligibility for kings and rooks and the double push for pawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub role: SlotRole,
    pub side: Side,
    pub square: Option<Square>,
    pub has_moved: bool,
}

impl PieceRecord {
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.role.kind()
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.role.kind().value()
    }

    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.square.is_some()
    }
}
