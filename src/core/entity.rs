//! Entity identification for pieces and columns.
//!
//! Pieces and columns live in id-keyed arenas owned by
//! [`GameState`](super::GameState). Everything that refers to a piece or a
//! column holds one of these ids, never a reference, so ownership transfers
//! between columns are plain id moves.
//!
//! ## ID Allocation
//!
//! Ids are allocated monotonically by the owning `GameState` and are never
//! reused, so a stale `ColumnId` of a destroyed column can always be told
//! apart from a live one.
//!
//! ```
//! use column_chess::core::{ColumnId, PieceId};
//!
//! let piece = PieceId::new(7);
//! let column = ColumnId::new(7);
//!
//! assert_eq!(piece.raw(), column.raw());
//! assert_eq!(format!("{piece}"), "Piece(7)");
//! assert_eq!(format!("{column}"), "Column(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a spawned piece.
///
/// Stable for the piece's whole life, whichever column it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Unique identifier of a column.
///
/// A column id dies with its column: once the last piece leaves, the id is
/// removed from the arena and never handed out again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnId(pub u32);

impl ColumnId {
    /// Create a column ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ColumnId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column({})", self.0)
    }
}
