//! A single board cell.

use serde::{Deserialize, Serialize};

use crate::core::{ColumnId, Coordinate};

/// One cell of the board: a fixed coordinate plus the column resident on it.
///
/// Occupancy is only ever changed by the column algebra
/// (`GameState::assign_square` and column destruction). A square never
/// changes occupancy on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    coordinate: Coordinate,
    column: Option<ColumnId>,
}

impl Square {
    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            column: None,
        }
    }

    /// The square's coordinate.
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The column legitimately resident on this square, if any.
    #[must_use]
    pub fn column(&self) -> Option<ColumnId> {
        self.column
    }

    /// Check whether no column is resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.column.is_none()
    }

    pub(crate) fn place_column(&mut self, column: ColumnId) {
        self.column = Some(column);
    }

    pub(crate) fn clear(&mut self) {
        self.column = None;
    }
}
