//! Move representation.

use crate::{CoordError, Square};
use std::fmt;
use std::str::FromStr;

/// A proposed move: a source and a destination square.
///
/// A move carries no piece; the board looks up whatever stands on `from`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parses coordinate notation: `"c3e1"`, `"c3-e1"` or `"c3 e1"`.
    pub fn parse(s: &str) -> Result<Self, CoordError> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(CoordError::InvalidNotation(s.to_string()));
        }
        let from = Square::parse(&compact[0..2])?;
        let to = Square::parse(&compact[2..4])?;
        Ok(Move::new(from, to))
    }

    /// Returns the compact notation for this move (e.g., "c3e1").
    pub fn to_notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
