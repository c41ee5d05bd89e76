//! Square indexing on the padded 10x12 board.
//!
//! The playable 8x8 area sits inside a 120-cell array with a two-row border
//! above and below and a one-column border on either side, so off-board
//! destinations can be detected by cell lookup instead of coordinate
//! arithmetic. Files a-h map to columns 1-8, ranks 8-1 map to rows 2-9, and
//! `index = 10 * row + column`, giving a1 = 91, h1 = 98, a8 = 21, h8 = 28.

use std::fmt;

use crate::errors::RulesError;

/// Index into the padded 120-cell board. May denote a border cell; whether a
/// square is playable is answered by the grid (or [`Square::is_playable`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Wrap a raw padded-board index. Contract: `idx < 120`.
    #[inline]
    pub const fn from_raw(idx: u8) -> Self {
        Square(idx)
    }

    /// Build a playable square from a zero-based file (0 = a) and a one-based
    /// rank (1-8). Contract: both in range; callers parsing external input
    /// validate first.
    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        let row = 10 - rank;
        let column = file + 1;
        Square(10 * row + column)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file (0 = a-file). Meaningful for playable squares only.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 10 - 1
    }

    /// One-based rank (1-8). Meaningful for playable squares only.
    #[inline]
    pub const fn rank(self) -> u8 {
        10 - self.0 / 10
    }

    /// True when the index falls inside the 8x8 area rather than the border.
    #[inline]
    pub const fn is_playable(self) -> bool {
        let row = self.0 / 10;
        let column = self.0 % 10;
        row >= 2 && row <= 9 && column >= 1 && column <= 8
    }

    /// Step by a padded-board delta. Any single piece offset applied to a
    /// playable square stays inside the 120-cell array, so the result is
    /// always a valid index (possibly a border cell).
    #[inline]
    pub fn offset(self, delta: i16) -> Square {
        let idx = self.0 as i16 + delta;
        debug_assert!((0..120).contains(&idx));
        Square(idx as u8)
    }

    /// Algebraic coordinate such as `e4`. Border squares are a contract
    /// violation and reported as such.
    pub fn to_algebraic(self) -> Result<String, RulesError> {
        if !self.is_playable() {
            return Err(RulesError::OffBoardAccess(self));
        }
        let file_char = char::from(b'a' + self.file());
        let rank_char = char::from(b'0' + self.rank());
        Ok(format!("{file_char}{rank_char}"))
    }

    /// Parse an algebraic coordinate such as `e4`.
    pub fn from_algebraic(s: &str) -> Result<Square, RulesError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(RulesError::InvalidAlgebraic(s.to_string()));
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(RulesError::InvalidAlgebraic(s.to_string()));
        }
        Ok(Square::from_file_rank(file - b'a', rank - b'0'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "#{}", self.0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn corner_encoding() {
        assert_eq!(Square::from_file_rank(0, 1).index(), 91); // a1
        assert_eq!(Square::from_file_rank(7, 1).index(), 98); // h1
        assert_eq!(Square::from_file_rank(0, 8).index(), 21); // a8
        assert_eq!(Square::from_file_rank(7, 8).index(), 28); // h8
    }

    #[test]
    fn file_rank_round_trip() {
        for file in 0..8u8 {
            for rank in 1..=8u8 {
                let sq = Square::from_file_rank(file, rank);
                assert!(sq.is_playable());
                assert_eq!(sq.file(), file);
                assert_eq!(sq.rank(), rank);
            }
        }
    }

    #[test]
    fn algebraic_round_trip() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.to_algebraic().unwrap(), "e4");
        assert_eq!(e4.index(), 65);
        assert!(Square::from_algebraic("i4").is_err());
        assert!(Square::from_algebraic("e9").is_err());
        assert!(Square::from_algebraic("e").is_err());
    }

    #[test]
    fn border_squares_are_not_playable() {
        assert!(!Square::from_raw(0).is_playable());
        assert!(!Square::from_raw(20).is_playable());
        assert!(!Square::from_raw(29).is_playable());
        assert!(!Square::from_raw(119).is_playable());
        assert!(Square::from_raw(91).to_algebraic().is_ok());
        assert!(Square::from_raw(90).to_algebraic().is_err());
    }
}
