//! Per-piece movement rules.
//!
//! A movement rule looks only at geometry: given a source and a destination
//! it returns the squares the piece would cross, or an empty [`Traversal`]
//! if the piece cannot move in that shape. Occupancy is the board's job.

use crate::Traversal;
use chess_core::{PieceKind, Square};

/// Produces the path a piece kind would take between two squares.
///
/// Implemented for [`PieceKind`] with an exhaustive match, so adding a kind
/// forces a decision about its rule.
pub trait Movement {
    /// Returns the inclusive path from `from` to `to`, or an empty
    /// traversal when the shape is illegal for this piece.
    fn traversal(&self, from: Square, to: Square) -> Traversal;
}

impl Movement for PieceKind {
    fn traversal(&self, from: Square, to: Square) -> Traversal {
        match self {
            PieceKind::Bishop => bishop_traversal(from, to),
            PieceKind::Rook => rook_traversal(from, to),
            // No movement rules yet: every move by these pieces is rejected
            // as an illegal shape.
            PieceKind::Pawn | PieceKind::Knight | PieceKind::Queen | PieceKind::King => {
                Traversal::new()
            }
        }
    }
}

/// Diagonal path from `from` to `to`, source first.
///
/// Requires `|file delta| == |rank delta| > 0`.
pub fn bishop_traversal(from: Square, to: Square) -> Traversal {
    let files = from.file_distance(to);
    let ranks = from.rank_distance(to);
    if files == 0 || files.abs() != ranks.abs() {
        return Traversal::new();
    }
    ray(from, files.signum(), ranks.signum(), files.unsigned_abs())
}

/// Straight path between `from` and `to`, in ascending board order.
///
/// Requires exactly one of the file and rank deltas to be nonzero. The
/// path runs from the lower square to the higher one, so it may start at
/// `to`; callers orient it with [`Traversal::oriented_from`].
pub fn rook_traversal(from: Square, to: Square) -> Traversal {
    let files = from.file_distance(to);
    let ranks = from.rank_distance(to);
    if (files == 0) == (ranks == 0) {
        return Traversal::new();
    }
    let (low, high) = if from < to { (from, to) } else { (to, from) };
    let steps = files.unsigned_abs().max(ranks.unsigned_abs());
    ray(
        low,
        low.file_distance(high).signum(),
        low.rank_distance(high).signum(),
        steps,
    )
}

/// Walks `steps` squares from `start` in a fixed direction, collecting
/// `start` and every square reached.
fn ray(start: Square, file_step: i8, rank_step: i8, steps: u8) -> Traversal {
    let mut path = Traversal::new();
    path.push(start);
    let mut current = start;
    for _ in 0..steps {
        match current.offset(file_step, rank_step) {
            Some(next) => {
                path.push(next);
                current = next;
            }
            None => return Traversal::new(),
        }
    }
    path
}
