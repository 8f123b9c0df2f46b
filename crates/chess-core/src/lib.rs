//! Core types for chess move validation.
//!
//! This crate provides the fundamental types shared by the rules crate and
//! its front ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for a proposed source/destination pair
//! - FEN piece-placement parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{parse_placement, write_placement, FenError, EMPTY_PLACEMENT};
pub use mov::Move;
pub use piece::{Piece, PieceKind, PieceParseError};
pub use square::{CoordError, File, Rank, Square};
