//! FEN (Forsyth-Edwards Notation) piece placement.
//!
//! Only the first FEN field is meaningful here: which piece stands where.
//! Side to move, castling, en passant and the clocks are accepted and
//! ignored, since positions are validated as static snapshots.

use crate::{File, Piece, Rank, Square};
use thiserror::Error;

/// Errors that can occur when parsing a piece placement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("empty FEN string")]
    Empty,

    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankWidth { rank: u8, squares: u32 },
}

/// Placement of the empty board.
pub const EMPTY_PLACEMENT: &str = "8/8/8/8/8/8/8/8";

/// Parses the piece-placement field of a FEN string.
///
/// A complete FEN record is accepted; everything after the first field is
/// ignored. Returns the occupied squares in FEN order (rank 8 first).
pub fn parse_placement(fen: &str) -> Result<Vec<(Square, Piece)>, FenError> {
    let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount(ranks.len()));
    }

    let mut pieces = Vec::new();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = Rank::ALL[7 - row];
        let mut width = 0u32;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                width += digit;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                // Skip placing past the h-file; the width check below reports it.
                if let Some(file) = File::from_index(width as u8) {
                    pieces.push((Square::new(file, rank), piece));
                }
                width += 1;
            } else {
                return Err(FenError::InvalidCharacter {
                    character: c,
                    rank: rank.number(),
                });
            }
        }
        if width != 8 {
            return Err(FenError::InvalidRankWidth {
                rank: rank.number(),
                squares: width,
            });
        }
    }

    Ok(pieces)
}

/// Writes a piece-placement field from a square lookup.
pub fn write_placement(piece_at: impl Fn(Square) -> Option<Piece>) -> String {
    let mut fen = String::new();
    for rank in Rank::ALL.iter().rev() {
        let mut empty_count = 0;
        for file in File::ALL {
            match piece_at(Square::new(file, *rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if *rank != Rank::R1 {
            fen.push('/');
        }
    }
    fen
}
