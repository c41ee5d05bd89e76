//! Move representation.
//!
//! A move is a plain origin/destination pair; castling is recognized from the
//! moving piece rather than encoded in the move itself. Anything persisted or
//! printed uses the algebraic coordinate form (`e2e4`), never raw padded
//! indices, so external representations stay independent of the board
//! padding scheme.

use std::fmt;

use crate::board::square::Square;
use crate::errors::RulesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Coordinate form such as `e2e4`. Contract: both squares playable.
    pub fn to_coordinate(&self) -> Result<String, RulesError> {
        Ok(format!(
            "{}{}",
            self.from.to_algebraic()?,
            self.to.to_algebraic()?
        ))
    }

    /// Parse the coordinate form such as `e2e4`.
    pub fn from_coordinate(s: &str) -> Result<Move, RulesError> {
        let trimmed = s.trim();
        if trimmed.len() != 4 {
            return Err(RulesError::InvalidAlgebraic(s.to_string()));
        }
        let from = Square::from_algebraic(&trimmed[..2])?;
        let to = Square::from_algebraic(&trimmed[2..])?;
        Ok(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coordinate_round_trip() {
        let mv = Move::from_coordinate("e2e4").unwrap();
        assert_eq!(mv.from.index(), 85);
        assert_eq!(mv.to.index(), 65);
        assert_eq!(mv.to_coordinate().unwrap(), "e2e4");
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(Move::from_coordinate("e2").is_err());
        assert!(Move::from_coordinate("e2e9").is_err());
        assert!(Move::from_coordinate("x2e4").is_err());
    }
}
