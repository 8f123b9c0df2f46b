//! Verdicts produced by the occupancy resolver.

use chess_core::{Piece, Square};
use std::fmt;
use thiserror::Error;

/// Malformed input to a move query.
///
/// Geometry and occupancy problems are never errors; they come back as an
/// illegal [`MoveOutcome`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece at source square {0}")]
    NoPieceAtSource(Square),

    #[error(transparent)]
    InvalidCoordinate(#[from] chess_core::CoordError),
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The piece cannot move in that shape (includes moving to its own square).
    InvalidShape,
    /// A piece stands on this square before the destination.
    Blocked(Square),
    /// The destination holds a piece of the mover's own color.
    FriendlyTarget(Square),
    /// The path never reached the destination.
    PathIncomplete,
}

/// Result of resolving a move against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Legal move onto an empty square.
    Quiet,
    /// Legal move taking the given enemy piece.
    Capture(Piece),
    /// Illegal move.
    Illegal(Rejection),
}

impl MoveOutcome {
    /// Returns true for quiet moves and captures.
    #[inline]
    pub const fn is_legal(self) -> bool {
        !matches!(self, MoveOutcome::Illegal(_))
    }

    /// Returns the captured piece, if any.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        match self {
            MoveOutcome::Capture(piece) => Some(piece),
            _ => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidShape => write!(f, "illegal shape for this piece"),
            Rejection::Blocked(sq) => write!(f, "path blocked at {}", sq),
            Rejection::FriendlyTarget(sq) => write!(f, "own piece on {}", sq),
            Rejection::PathIncomplete => write!(f, "path does not reach the destination"),
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Quiet => write!(f, "legal"),
            MoveOutcome::Capture(piece) => write!(f, "legal, captures {}", piece),
            MoveOutcome::Illegal(reason) => write!(f, "illegal: {}", reason),
        }
    }
}
