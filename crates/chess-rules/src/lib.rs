//! Move-legality rules for a single piece on a static board.
//!
//! This crate provides:
//! - [`Movement`] - per-piece movement rules producing a [`Traversal`]
//! - [`Board`] - the 64-square grid and its occupancy resolver
//! - [`MoveOutcome`] - detailed verdicts, reduced to a boolean by
//!   [`Board::attempt_move`]
//!
//! Only bishops and rooks have movement rules. There is no side to move,
//! no check detection and no special moves; a query looks at one piece,
//! its path and its destination.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Piece, Square};
//! use chess_rules::Board;
//!
//! let mut board = Board::new();
//! board.place_piece(Piece::bishop(Color::White), Square::parse("c3").unwrap());
//! board.place_piece(Piece::pawn(Color::Black), Square::parse("f6").unwrap());
//!
//! assert_eq!(board.attempt_move_notation("c3", "f6"), Ok(true));
//! assert_eq!(board.attempt_move_notation("c3", "g7"), Ok(false));
//! ```

mod board;
pub mod movement;
mod outcome;
mod traversal;

pub use board::{Board, BoardSquare, Shade};
pub use movement::{bishop_traversal, rook_traversal, Movement};
pub use outcome::{MoveError, MoveOutcome, Rejection};
pub use traversal::Traversal;
