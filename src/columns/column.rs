//! The column: an ordered stack of pieces.
//!
//! Index 0 is the top of the stack, the *commander*; the last index is the
//! bottom. A live column is never empty, so `commander()` and `bottom()`
//! always exist. Mutation goes through the stack algebra on
//! [`GameState`](crate::core::GameState); this type only exposes reads.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ColumnId, Coordinate, PieceId};

/// Ordered stack of pieces, commander first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,

    /// Top to bottom. SmallVec keeps typical stacks off the heap.
    pieces: SmallVec<[PieceId; 4]>,

    /// Square reference. May differ from the square's resident column while
    /// the column is in flight.
    square: Option<Coordinate>,

    /// Piece the column is spatially anchored to; always the bottom piece
    /// once re-anchoring has run.
    anchor: PieceId,
}

impl Column {
    pub(crate) fn new(id: ColumnId, commander: PieceId) -> Self {
        let mut pieces = SmallVec::new();
        pieces.push(commander);
        Self {
            id,
            pieces,
            square: None,
            anchor: commander,
        }
    }

    /// The column's identity.
    #[must_use]
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Top piece.
    #[must_use]
    pub fn commander(&self) -> PieceId {
        self.pieces[0]
    }

    /// Bottom piece.
    #[must_use]
    pub fn bottom(&self) -> PieceId {
        self.pieces[self.pieces.len() - 1]
    }

    /// Pieces from top to bottom.
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Piece at `index` (0 = commander).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PieceId> {
        self.pieces.get(index).copied()
    }

    /// Index of a piece counted from the top.
    #[must_use]
    pub fn position_of(&self, piece: PieceId) -> Option<usize> {
        self.pieces.iter().position(|&p| p == piece)
    }

    /// Check whether a piece belongs to this column.
    #[must_use]
    pub fn contains(&self, piece: PieceId) -> bool {
        self.pieces.contains(&piece)
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false for a live column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The square this column refers to.
    #[must_use]
    pub fn square(&self) -> Option<Coordinate> {
        self.square
    }

    /// The piece the column is anchored to.
    #[must_use]
    pub fn anchor(&self) -> PieceId {
        self.anchor
    }

    // === Crate-internal mutation (used by the stack algebra) ===

    pub(crate) fn push_top(&mut self, piece: PieceId) {
        self.pieces.insert(0, piece);
    }

    pub(crate) fn push_bottom(&mut self, piece: PieceId) {
        self.pieces.push(piece);
    }

    pub(crate) fn pop_top(&mut self) -> Option<PieceId> {
        if self.pieces.is_empty() {
            None
        } else {
            Some(self.pieces.remove(0))
        }
    }

    pub(crate) fn pop_bottom(&mut self) -> Option<PieceId> {
        self.pieces.pop()
    }

    pub(crate) fn set_square(&mut self, square: Option<Coordinate>) {
        self.square = square;
    }

    pub(crate) fn set_anchor(&mut self, anchor: PieceId) {
        self.anchor = anchor;
    }
}
