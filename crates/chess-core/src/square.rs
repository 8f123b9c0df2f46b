//! Board coordinates: files, ranks and squares.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a coordinate falls outside the 8x8 board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("file number {0} out of range, expected 1-8")]
    FileOutOfRange(u8),

    #[error("rank number {0} out of range, expected 1-8")]
    RankOutOfRange(u8),

    #[error("invalid file '{0}', expected a-h")]
    InvalidFile(char),

    #[error("invalid square notation: '{0}'")]
    InvalidNotation(String),
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from a zero-based index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a file from its board number, a = 1 through h = 8.
    pub fn from_number(number: u8) -> Result<Self, CoordError> {
        number
            .checked_sub(1)
            .and_then(File::from_index)
            .ok_or(CoordError::FileOutOfRange(number))
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the zero-based index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the board number (1-8).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from a zero-based index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a rank from its board number (1-8).
    pub fn from_number(number: u8) -> Result<Self, CoordError> {
        number
            .checked_sub(1)
            .and_then(Rank::from_index)
            .ok_or(CoordError::RankOutOfRange(number))
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Rank::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// Returns the zero-based index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the board number (1-8).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from a file letter and a rank number, e.g. `('c', 3)`.
    pub fn from_coords(file: char, rank: u8) -> Result<Self, CoordError> {
        let file = File::from_char(file).ok_or(CoordError::InvalidFile(file))?;
        let rank = Rank::from_number(rank)?;
        Ok(Square::new(file, rank))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Parses algebraic notation, reporting malformed input as an error.
    pub fn parse(s: &str) -> Result<Self, CoordError> {
        Square::from_algebraic(s.trim()).ok_or_else(|| CoordError::InvalidNotation(s.to_string()))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Signed file distance from `self` to `other` (positive towards h).
    #[inline]
    pub const fn file_distance(self, other: Square) -> i8 {
        other.file().index() as i8 - self.file().index() as i8
    }

    /// Signed rank distance from `self` to `other` (positive towards 8).
    #[inline]
    pub const fn rank_distance(self, other: Square) -> i8 {
        other.rank().index() as i8 - self.rank().index() as i8
    }

    /// Returns the square shifted by the given file and rank steps, or
    /// `None` if it would leave the board.
    pub const fn offset(self, files: i8, ranks: i8) -> Option<Self> {
        let file = self.file().index() as i8 + files;
        let rank = self.rank().index() as i8 + ranks;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(Square(rank as u8 * 8 + file as u8))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub const A1: Square = Square(0);
}

impl FromStr for Square {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_numbers() {
        assert_eq!(File::from_number(1), Ok(File::A));
        assert_eq!(File::from_number(8), Ok(File::H));
        assert_eq!(File::C.number(), 3);
        assert_eq!(File::from_number(0), Err(CoordError::FileOutOfRange(0)));
        assert_eq!(File::from_number(9), Err(CoordError::FileOutOfRange(9)));
    }

    #[test]
    fn rank_numbers() {
        assert_eq!(Rank::from_number(1), Ok(Rank::R1));
        assert_eq!(Rank::R8.number(), 8);
        assert_eq!(Rank::from_number(0), Err(CoordError::RankOutOfRange(0)));
        assert_eq!(Rank::from_number(200), Err(CoordError::RankOutOfRange(200)));
        assert_eq!(Rank::from_char('5'), Some(Rank::R5));
        assert_eq!(Rank::from_char('9'), None);
    }

    #[test]
    fn square_new() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn square_from_coords() {
        assert_eq!(
            Square::from_coords('c', 3),
            Ok(Square::new(File::C, Rank::R3))
        );
        assert_eq!(Square::from_coords('i', 3), Err(CoordError::InvalidFile('i')));
        assert_eq!(Square::from_coords('a', 9), Err(CoordError::RankOutOfRange(9)));
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("h8").map(Square::index), Some(63));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_parse_reports_bad_notation() {
        assert_eq!("e4".parse::<Square>(), Ok(Square::new(File::E, Rank::R4)));
        assert_eq!(
            Square::parse("z0"),
            Err(CoordError::InvalidNotation("z0".to_string()))
        );
    }

    #[test]
    fn square_distances() {
        let c3 = Square::new(File::C, Rank::R3);
        let e1 = Square::new(File::E, Rank::R1);
        assert_eq!(c3.file_distance(e1), 2);
        assert_eq!(c3.rank_distance(e1), -2);
        assert_eq!(e1.file_distance(c3), -2);
    }

    #[test]
    fn square_offset_stays_on_board() {
        assert_eq!(Square::A1.offset(1, 1), Some(Square::new(File::B, Rank::R2)));
        assert_eq!(Square::A1.offset(-1, 0), None);
        let h8 = Square::new(File::H, Rank::R8);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(
            Square::new(File::H, Rank::R1).offset(-7, 7),
            Some(Square::new(File::A, Rank::R8))
        );
    }

    proptest::proptest! {
        #[test]
        fn numbers_outside_board_are_rejected(n in proptest::num::u8::ANY) {
            let on_board = (1..=8).contains(&n);
            proptest::prop_assert_eq!(File::from_number(n).is_ok(), on_board);
            proptest::prop_assert_eq!(Rank::from_number(n).is_ok(), on_board);
        }
    }

    #[test]
    fn square_display() {
        assert_eq!(Square::new(File::E, Rank::R4).to_algebraic(), "e4");
        assert_eq!(format!("{:?}", Square::new(File::H, Rank::R8)), "Square(h8)");
    }
}
