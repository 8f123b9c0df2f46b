//! Fixed-capacity list of squares crossed by a move.

use chess_core::Square;

/// The ordered squares a move crosses, both endpoints included.
///
/// An empty traversal means the piece cannot make that move at all.
/// No straight or diagonal path on the board covers more than 8 squares,
/// so the list lives on the stack.
#[derive(Clone, Copy)]
pub struct Traversal {
    squares: [Square; Self::MAX_LEN],
    len: usize,
}

impl Traversal {
    /// Longest possible path: one full file, rank or long diagonal.
    pub const MAX_LEN: usize = 8;

    /// Creates an empty traversal.
    #[inline]
    pub const fn new() -> Self {
        Traversal {
            squares: [Square::A1; Self::MAX_LEN],
            len: 0,
        }
    }

    /// Appends a square.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_LEN);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    /// Returns the number of squares.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the piece has no path.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the squares.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    /// Returns the first square, if any.
    #[inline]
    pub fn first(&self) -> Option<Square> {
        self.as_slice().first().copied()
    }

    /// Returns the last square, if any.
    #[inline]
    pub fn last(&self) -> Option<Square> {
        self.as_slice().last().copied()
    }

    /// Reverses the walking order in place.
    pub fn reverse(&mut self) {
        self.squares[..self.len].reverse();
    }

    /// Returns the traversal ordered so that it begins at `from`.
    ///
    /// Rules may emit a path end-first; the board always walks it
    /// source-first.
    pub fn oriented_from(mut self, from: Square) -> Self {
        if self.first() != Some(from) && self.last() == Some(from) {
            self.reverse();
        }
        self
    }

    /// Returns an iterator over the squares.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for Traversal {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Traversal {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Traversal {}

impl<'a> IntoIterator for &'a Traversal {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
