//! Chess piece representation.

use crate::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a textual piece description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("unknown piece color: '{0}'")]
    UnknownColor(String),

    #[error("unknown piece kind: '{0}'")]
    UnknownKind(String),
}

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the lowercase name, e.g. `"bishop"`.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Returns the first letter of the name, used by the text board.
    ///
    /// Knight and king share `'k'`.
    pub const fn letter(self) -> char {
        self.name().as_bytes()[0] as char
    }

    /// Returns the FEN character for this kind with the given color.
    pub const fn to_fen_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl FromStr for PieceKind {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| PieceParseError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: a kind and the team it belongs to.
///
/// A piece does not know where it stands; the board owns that relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    pub const fn pawn(color: Color) -> Self {
        Piece::new(color, PieceKind::Pawn)
    }

    pub const fn bishop(color: Color) -> Self {
        Piece::new(color, PieceKind::Bishop)
    }

    pub const fn rook(color: Color) -> Self {
        Piece::new(color, PieceKind::Rook)
    }

    /// Returns the FEN character for this piece.
    #[inline]
    pub const fn to_fen_char(self) -> char {
        self.kind.to_fen_char(self.color)
    }

    /// Parses a FEN character into a piece.
    pub const fn from_fen_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
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
        Some(Piece::new(color, kind))
    }

    /// Returns true if `other` belongs to the opposing team.
    #[inline]
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.color != other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
