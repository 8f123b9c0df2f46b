//! Piece color representation.

use crate::PieceParseError;
use std::str::FromStr;

/// The two teams a piece can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the lowercase name used in sheets and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl FromStr for Color {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(PieceParseError::UnknownColor(s.to_string())),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!("Black".parse::<Color>(), Ok(Color::Black));
        assert_eq!(" b ".parse::<Color>(), Ok(Color::Black));
        assert_eq!(
            "green".parse::<Color>(),
            Err(PieceParseError::UnknownColor("green".to_string()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
        assert_eq!(Color::Black.name(), "black");
    }
}
