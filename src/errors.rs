//! Errors used throughout the rules engine.
//!
//! A single crate-wide enum keeps propagation and matching simple. Expected,
//! recoverable failures (an illegal candidate move, an undo request with no
//! recorded move) travel as ordinary `Result` values. `OffBoardAccess` marks
//! an internal contract violation and is never produced during correct
//! operation; internal call sites additionally assert in debug builds.

use std::fmt;

use crate::board::square::Square;
use crate::game::chess_move::Move;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The candidate move is not in the legal move set for its side.
    IllegalMove(Move),
    /// Undo was requested but no move is recorded. A no-op, not a fault.
    NoMoveToUndo,
    /// A square outside the playable area was dereferenced.
    OffBoardAccess(Square),
    /// An algebraic coordinate or move string could not be parsed.
    InvalidAlgebraic(String),
    /// A FEN string was malformed or does not fit the fixed sixteen-slot
    /// roster model (for example, more than two rooks per side).
    InvalidFen(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::IllegalMove(mv) => write!(f, "illegal move: {mv}"),
            RulesError::NoMoveToUndo => write!(f, "no move available to undo"),
            RulesError::OffBoardAccess(sq) => {
                write!(f, "off-board square dereferenced: index {}", sq.index())
            }
            RulesError::InvalidAlgebraic(s) => write!(f, "invalid algebraic notation: {s}"),
            RulesError::InvalidFen(s) => write!(f, "invalid FEN: {s}"),
        }
    }
}

impl std::error::Error for RulesError {}
