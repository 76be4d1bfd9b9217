//! Piece instances - runtime piece state.
//!
//! A `Piece` is created once by the spawner and never changes afterwards,
//! except for the column it belongs to. The column link is `None` only for
//! a piece that was just released from a column and not yet re-homed.

use serde::{Deserialize, Serialize};

use super::kind::{PieceKind, Team};
use crate::core::{ColumnId, PieceId};

/// A spawned piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    code: String,
    team: Team,
    capturable: bool,
    notes: Option<String>,
    column: Option<ColumnId>,
}

impl Piece {
    /// Create a detached piece of the given kind.
    ///
    /// Only the `GameState` spawn methods call this; they put the piece in
    /// a column before handing it out.
    pub(crate) fn new(id: PieceId, kind: &PieceKind, notes: Option<String>) -> Self {
        Self {
            id,
            code: kind.code.clone(),
            team: kind.team,
            capturable: kind.capturable,
            notes,
            column: None,
        }
    }

    /// The piece's identity.
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Notation code of the piece's kind.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Owning side.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// Whether the piece can be carried off as a prisoner.
    #[must_use]
    pub fn is_capturable(&self) -> bool {
        self.capturable
    }

    /// Free-form annotation from the position notation.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// The column the piece belongs to.
    #[must_use]
    pub fn column(&self) -> Option<ColumnId> {
        self.column
    }

    /// Check whether the piece currently belongs to a column.
    #[must_use]
    pub fn has_column(&self) -> bool {
        self.column.is_some()
    }

    pub(crate) fn set_column(&mut self, column: Option<ColumnId>) {
        self.column = column;
    }
}
