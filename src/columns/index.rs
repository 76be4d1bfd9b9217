//! Spatial index over placed columns.
//!
//! Built on demand from a [`GameState`] for nearest-column queries (camera
//! focus, hover picking). The index is a plain snapshot: rebuild it after
//! the board changes instead of keeping it in sync.

use crate::core::{ColumnId, Coordinate, GameState};
use crate::pieces::Team;

/// One placed column as seen by the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedColumn {
    pub column: ColumnId,
    pub at: Coordinate,
    /// Team of the column's commander.
    pub team: Team,
}

/// Snapshot of every column that occupies a square.
#[derive(Clone, Debug, Default)]
pub struct ColumnIndex {
    entries: Vec<IndexedColumn>,
}

impl ColumnIndex {
    /// Snapshot the columns currently resident on squares, ordered by id.
    #[must_use]
    pub fn build(state: &GameState) -> Self {
        let mut entries: Vec<_> = state
            .board()
            .occupied()
            .filter_map(|(at, column)| {
                let commander = state.column(column)?.commander();
                let team = state.piece(commander)?.team();
                Some(IndexedColumn { column, at, team })
            })
            .collect();
        entries.sort_by_key(|e| e.column);
        Self { entries }
    }

    /// Indexed columns, ordered by id.
    #[must_use]
    pub fn entries(&self) -> &[IndexedColumn] {
        &self.entries
    }

    /// Number of indexed columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column closest to `point`. Ties go to the lower column id.
    #[must_use]
    pub fn nearest(&self, point: Coordinate) -> Option<IndexedColumn> {
        self.nearest_matching(point, |_| true)
    }

    /// Closest column whose commander is not on `team`.
    #[must_use]
    pub fn nearest_except(&self, point: Coordinate, team: Team) -> Option<IndexedColumn> {
        self.nearest_matching(point, |e| e.team != team)
    }

    /// Columns whose commander is not on `team`.
    pub fn all_except(&self, team: Team) -> impl Iterator<Item = &IndexedColumn> {
        self.entries.iter().filter(move |e| e.team != team)
    }

    fn nearest_matching<F>(&self, point: Coordinate, keep: F) -> Option<IndexedColumn>
    where
        F: Fn(&IndexedColumn) -> bool,
    {
        self.entries
            .iter()
            .filter(|&e| keep(e))
            .min_by_key(|e| (e.at.distance_squared(point), e.column))
            .copied()
    }
}
