//! Column lifecycle events.
//!
//! The core never calls into the presentation layer. Instead every
//! observable change is queued as a `ColumnEvent` on the `GameState`, and
//! the collaborator drains the queue when it is ready to react (move the
//! column's visual anchor, add fresh pieces to an inventory, drop a
//! destroyed column's scene node).

use serde::{Deserialize, Serialize};

use crate::core::{ColumnId, Coordinate, PieceId};

/// Something that happened to a column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnEvent {
    /// A column came into existence holding a single piece.
    Created { column: ColumnId, commander: PieceId },

    /// A freshly spawned column took residence on a square. Its pieces are
    /// new to the game.
    Registered { column: ColumnId, at: Coordinate },

    /// The bottom piece changed; the column's anchor must be recomputed
    /// from `bottom`.
    Reanchored { column: ColumnId, bottom: PieceId },

    /// The column lost its last piece (or was deleted) and no longer exists.
    Destroyed { column: ColumnId },
}

impl ColumnEvent {
    /// The column the event is about.
    #[must_use]
    pub fn column(&self) -> ColumnId {
        match self {
            ColumnEvent::Created { column, .. }
            | ColumnEvent::Registered { column, .. }
            | ColumnEvent::Reanchored { column, .. }
            | ColumnEvent::Destroyed { column } => *column,
        }
    }
}
