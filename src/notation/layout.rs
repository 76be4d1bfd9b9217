//! Decoded position data.
//!
//! A [`Layout`] is what an rpgFEN string describes: a board id plus, for
//! every occupied square, the stack of piece specs on it (commander first).
//! It carries no piece identities; spawning turns it into a `GameState`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;

/// One piece entry: a kind code plus optional free-form notes.
///
/// Empty notes mean the same as no notes; they are never written out.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSpec {
    pub code: String,
    pub notes: Option<String>,
}

impl PieceSpec {
    /// A spec without notes.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            notes: None,
        }
    }

    /// Attach notes (builder pattern). Empty notes are dropped.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = (!notes.is_empty()).then_some(notes);
        self
    }
}

impl fmt::Display for PieceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notes.as_deref() {
            Some(notes) if !notes.is_empty() => write!(f, "{};{}", self.code, notes),
            _ => write!(f, "{}", self.code),
        }
    }
}

/// A stack of pieces on one square, commander first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub at: Coordinate,
    pub stack: Vec<PieceSpec>,
}

/// A whole position: board id and placements in description order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub board_id: String,
    pub placements: Vec<Placement>,
}

impl Layout {
    /// An empty layout for a board.
    #[must_use]
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            placements: Vec::new(),
        }
    }

    /// Add a stack (builder pattern).
    #[must_use]
    pub fn with_stack(mut self, at: Coordinate, stack: Vec<PieceSpec>) -> Self {
        self.placements.push(Placement { at, stack });
        self
    }

    /// The stack described for a square.
    #[must_use]
    pub fn stack_at(&self, at: Coordinate) -> Option<&[PieceSpec]> {
        self.placements
            .iter()
            .find(|p| p.at == at)
            .map(|p| p.stack.as_slice())
    }

    /// Coordinate to stack mapping, merging repeated coordinates (later
    /// stacks go beneath earlier ones) and dropping empty stacks.
    ///
    /// Two layouts describe the same board exactly when their occupancies
    /// are equal.
    #[must_use]
    pub fn occupancy(&self) -> BTreeMap<Coordinate, Vec<PieceSpec>> {
        let mut map: BTreeMap<Coordinate, Vec<PieceSpec>> = BTreeMap::new();
        for placement in &self.placements {
            if placement.stack.is_empty() {
                continue;
            }
            map.entry(placement.at)
                .or_default()
                .extend(placement.stack.iter().cloned());
        }
        map
    }

    /// Total number of pieces described.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.placements.iter().map(|p| p.stack.len()).sum()
    }
}
