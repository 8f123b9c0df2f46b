//! The board and its occupancy resolver.

use crate::movement::Movement;
use crate::{MoveError, MoveOutcome, Rejection, Traversal};
use chess_core::{
    parse_placement, write_placement, CoordError, FenError, File, Move, Piece, Rank, Square,
};
use std::fmt;

/// Display color of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Dark,
    Light,
}

impl Shade {
    /// a1 is dark; colors alternate along every file and rank.
    #[inline]
    pub const fn of(sq: Square) -> Self {
        if (sq.file().index() + sq.rank().index()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}

/// One cell of the board: a fixed coordinate and shade, plus an occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare {
    square: Square,
    shade: Shade,
    occupant: Option<Piece>,
}

impl BoardSquare {
    const fn empty(square: Square) -> Self {
        BoardSquare {
            square,
            shade: Shade::of(square),
            occupant: None,
        }
    }

    /// The coordinate of this cell.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn shade(&self) -> Shade {
        self.shade
    }

    /// The piece standing here, if any.
    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        self.occupant
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// An 8x8 board holding at most one piece per square.
///
/// All 64 squares exist from construction on; only their occupants change.
/// Move queries never modify the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [BoardSquare; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with 64 empty squares.
    pub fn new() -> Self {
        Board {
            squares: std::array::from_fn(|i| {
                BoardSquare::empty(Square::new(File::ALL[i % 8], Rank::ALL[i / 8]))
            }),
        }
    }

    /// Creates a board from the piece-placement field of a FEN string.
    pub fn from_placement(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::new();
        for (sq, piece) in parse_placement(fen)? {
            board.place_piece(piece, sq);
        }
        Ok(board)
    }

    /// Returns the FEN piece-placement field for this board.
    pub fn to_placement(&self) -> String {
        write_placement(|sq| self.piece_at(sq))
    }

    /// Returns the cell at `sq`.
    #[inline]
    pub fn square(&self, sq: Square) -> &BoardSquare {
        &self.squares[sq.index() as usize]
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.square(sq).piece()
    }

    /// Puts `piece` on `sq` without any legality check, returning whatever
    /// stood there before.
    pub fn place_piece(&mut self, piece: Piece, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].occupant.replace(piece)
    }

    /// Puts `piece` on the square named by a file letter and rank number.
    pub fn place_at(&mut self, piece: Piece, file: char, rank: u8) -> Result<(), CoordError> {
        let sq = Square::from_coords(file, rank)?;
        self.place_piece(piece, sq);
        Ok(())
    }

    /// Empties `sq`, returning its former occupant.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].occupant.take()
    }

    /// Iterates over all cells, a1 first.
    pub fn squares(&self) -> impl Iterator<Item = &BoardSquare> {
        self.squares.iter()
    }

    /// Iterates over occupied squares and their pieces.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .filter_map(|cell| cell.piece().map(|piece| (cell.square(), piece)))
    }

    /// Decides whether the piece on `from` may move to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoPieceAtSource`] if `from` is empty.
    pub fn attempt_move(&self, from: Square, to: Square) -> Result<bool, MoveError> {
        self.resolve_move(from, to).map(MoveOutcome::is_legal)
    }

    /// Like [`attempt_move`](Self::attempt_move) but takes algebraic
    /// notation, e.g. `("c3", "e1")`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] for malformed squares and
    /// [`MoveError::NoPieceAtSource`] if the source is empty.
    pub fn attempt_move_notation(&self, from: &str, to: &str) -> Result<bool, MoveError> {
        self.attempt_move(Square::parse(from)?, Square::parse(to)?)
    }

    /// Resolves a [`Move`] to a detailed outcome.
    pub fn resolve(&self, m: Move) -> Result<MoveOutcome, MoveError> {
        self.resolve_move(m.from, m.to)
    }

    /// Resolves a move to a detailed outcome: the piece's movement rule
    /// supplies the path, then the path is checked for blockers and the
    /// destination for a capturable piece.
    pub fn resolve_move(&self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAtSource(from))?;
        let path = piece.kind.traversal(from, to);
        let outcome = self.resolve_path(piece, from, to, path);
        tracing::debug!(%from, %to, %piece, %outcome, "resolved move");
        Ok(outcome)
    }

    /// Walks `path` for `piece` moving from `from` to `to`.
    ///
    /// The source square is skipped. The first occupied square ends the
    /// walk: it is a capture only if it is `to` and holds an enemy piece.
    pub fn resolve_path(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        path: Traversal,
    ) -> MoveOutcome {
        if path.is_empty() {
            tracing::trace!(%from, %to, kind = %piece.kind, "no path for this shape");
            return MoveOutcome::Illegal(Rejection::InvalidShape);
        }

        let path = path.oriented_from(from);
        for &sq in path.iter().filter(|&&sq| sq != from) {
            match self.piece_at(sq) {
                Some(occupant) if sq == to => {
                    return if piece.is_enemy_of(occupant) {
                        MoveOutcome::Capture(occupant)
                    } else {
                        tracing::trace!(%to, %occupant, "destination holds own piece");
                        MoveOutcome::Illegal(Rejection::FriendlyTarget(to))
                    };
                }
                Some(occupant) => {
                    tracing::trace!(%sq, %occupant, "path blocked");
                    return MoveOutcome::Illegal(Rejection::Blocked(sq));
                }
                None if sq == to => return MoveOutcome::Quiet,
                None => {}
            }
        }

        MoveOutcome::Illegal(Rejection::PathIncomplete)
    }

    /// Renders one line per rank, 8 down to 1, e.g. `"6: [ ][ ][ ][r][ ][p][ ][ ]"`.
    ///
    /// Occupied squares show the first letter of the piece kind.
    pub fn render_text(&self) -> Vec<String> {
        Rank::ALL
            .iter()
            .rev()
            .map(|&rank| {
                let mut line = format!("{}: ", rank);
                for file in File::ALL {
                    match self.piece_at(Square::new(file, rank)) {
                        Some(piece) => {
                            line.push('[');
                            line.push(piece.kind.letter());
                            line.push(']');
                        }
                        None => line.push_str("[ ]"),
                    }
                }
                line
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_text() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
