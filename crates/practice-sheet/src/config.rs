//! Practice sheet loading.
//!
//! A sheet is a TOML file describing a board setup and a list of moves to
//! check against it.

use chess_core::{Color, CoordError, FenError, Piece, PieceKind, PieceParseError, Square};
use chess_rules::Board;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The sheet compiled into the binary, used when no `--sheet` is given.
pub const BUILTIN_SHEET: &str = include_str!("../sheets/default.toml");

/// Errors that can occur when loading a sheet or building its board.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Failed to read the sheet file from disk.
    #[error("Failed to read sheet: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the sheet as valid TOML.
    #[error("Failed to parse sheet: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The `placement` field is not a valid FEN piece placement.
    #[error("Invalid placement: {0}")]
    PlacementError(#[from] FenError),
    /// A piece entry names a square that does not exist.
    #[error("Invalid square in piece list: {0}")]
    SquareError(#[from] CoordError),
    /// A piece entry has an unknown color or kind.
    #[error("Invalid piece: {0}")]
    PieceError(#[from] PieceParseError),
}

/// A piece to put on the board.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PieceConfig {
    /// Square in algebraic notation, e.g. `"c3"`.
    pub square: String,
    /// `"white"` or `"black"`.
    pub color: String,
    /// Piece kind name, e.g. `"bishop"`.
    pub kind: String,
}

impl PieceConfig {
    /// Resolves the textual fields into a square and a piece.
    pub fn resolve(&self) -> Result<(Square, Piece), SheetError> {
        let square = Square::parse(&self.square)?;
        let color: Color = self.color.parse()?;
        let kind: PieceKind = self.kind.parse()?;
        Ok((square, Piece::new(color, kind)))
    }
}

/// A move to check.
///
/// Without `expect` the move is only reported, never counted as a failure.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub expect: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CheckConfig {
    /// Returns the description, or `"from -> to"` when none was given.
    pub fn label(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("{} -> {}", self.from, self.to))
    }
}

/// A complete practice sheet.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SheetConfig {
    /// Title printed above the report.
    #[serde(default = "default_title")]
    pub title: String,
    /// Optional FEN piece placement applied before `pieces`.
    #[serde(default)]
    pub placement: Option<String>,
    /// Pieces placed on the board, after `placement`.
    #[serde(default)]
    pub pieces: Vec<PieceConfig>,
    /// Moves to check.
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

fn default_title() -> String {
    "Practice sheet".to_string()
}

impl SheetConfig {
    /// Loads a sheet from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::ReadError`] if the file cannot be read, or
    /// [`SheetError::ParseError`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a sheet from TOML text.
    pub fn parse(content: &str) -> Result<Self, SheetError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the sheet bundled with the binary.
    pub fn builtin() -> Result<Self, SheetError> {
        Self::parse(BUILTIN_SHEET)
    }

    /// Builds the board described by `placement` and `pieces`.
    pub fn build_board(&self) -> Result<Board, SheetError> {
        let mut board = match &self.placement {
            Some(fen) => Board::from_placement(fen)?,
            None => Board::new(),
        };
        for entry in &self.pieces {
            let (square, piece) = entry.resolve()?;
            if let Some(previous) = board.place_piece(piece, square) {
                tracing::warn!(%square, %previous, %piece, "sheet replaces a piece");
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtin_sheet() {
        let sheet = SheetConfig::builtin().unwrap();
        assert_eq!(sheet.title, "Bishop and rook practice");
        assert_eq!(sheet.pieces.len(), 5);
        assert_eq!(sheet.checks.len(), 18);
        assert!(sheet.checks.iter().all(|c| c.expect.is_some()));
    }

    #[test]
    fn test_parse_sheet_with_missing_optional_fields() {
        let sheet = SheetConfig::parse(
            r#"
[[checks]]
from = "a1"
to = "a8"
"#,
        )
        .unwrap();

        assert_eq!(sheet.title, "Practice sheet");
        assert!(sheet.placement.is_none());
        assert!(sheet.pieces.is_empty());
        assert_eq!(sheet.checks[0].expect, None);
        assert_eq!(sheet.checks[0].label(), "a1 -> a8");
    }

    #[test]
    fn test_build_board_from_placement_and_pieces() {
        let sheet = SheetConfig::parse(
            r#"
placement = "8/8/3r4/8/8/8/8/8"

[[pieces]]
square = "d3"
color = "white"
kind = "pawn"
"#,
        )
        .unwrap();

        let board = sheet.build_board().unwrap();
        let d6 = Square::parse("d6").unwrap();
        let d3 = Square::parse("d3").unwrap();
        assert_eq!(board.piece_at(d6), Some(Piece::rook(Color::Black)));
        assert_eq!(board.piece_at(d3), Some(Piece::pawn(Color::White)));
    }

    #[test]
    fn test_build_board_reports_bad_pieces() {
        let bad_square = SheetConfig::parse(
            r#"
[[pieces]]
square = "k9"
color = "white"
kind = "pawn"
"#,
        )
        .unwrap();
        assert!(matches!(
            bad_square.build_board(),
            Err(SheetError::SquareError(CoordError::InvalidNotation(_)))
        ));

        let bad_kind = SheetConfig::parse(
            r#"
[[pieces]]
square = "a1"
color = "white"
kind = "archbishop"
"#,
        )
        .unwrap();
        assert!(matches!(
            bad_kind.build_board(),
            Err(SheetError::PieceError(PieceParseError::UnknownKind(_)))
        ));
    }

    #[test]
    fn test_bad_placement_is_reported() {
        let sheet = SheetConfig::parse(r#"placement = "8/8/8""#).unwrap();
        assert!(matches!(
            sheet.build_board(),
            Err(SheetError::PlacementError(FenError::InvalidRankCount(3)))
        ));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        assert!(matches!(
            SheetConfig::parse("checks = 3"),
            Err(SheetError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = SheetConfig::load(Path::new("/nonexistent/sheet.toml"));
        assert!(matches!(result, Err(SheetError::ReadError(_))));
    }
}
