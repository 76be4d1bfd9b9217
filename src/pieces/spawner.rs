//! Turning piece specs into live columns.
//!
//! The notation codec never creates pieces itself. It asks a
//! [`PieceVocabulary`] whether a code exists while decoding, and hands each
//! decoded stack to a [`ColumnSpawner`] when loading. `PieceSpawner` is the
//! registry-backed implementation; games with their own piece setup (stats,
//! inventories, sprites) implement the traits on their own type.

use tracing::trace;

use super::registry::PieceKindRegistry;
use crate::core::{ColumnId, Coordinate, GameState, StackError};
use crate::notation::PieceSpec;

/// The set of piece codes a position may use.
pub trait PieceVocabulary {
    /// Check whether `code` names a known piece kind.
    fn recognizes(&self, code: &str) -> bool;
}

impl PieceVocabulary for PieceKindRegistry {
    fn recognizes(&self, code: &str) -> bool {
        self.contains(code)
    }
}

/// Creates columns from decoded stacks.
///
/// ## Implementation Notes
///
/// - `stack` is commander first and never empty when called by the loader
/// - the new column must end up registered on `at`
/// - on error nothing may be left behind in `state`
pub trait ColumnSpawner: PieceVocabulary {
    /// Spawn `stack` as one column on the square `at`.
    fn spawn_column(
        &mut self,
        state: &mut GameState,
        stack: &[PieceSpec],
        at: Coordinate,
    ) -> Result<ColumnId, StackError>;
}

/// Spawner backed by a [`PieceKindRegistry`].
#[derive(Clone, Debug)]
pub struct PieceSpawner {
    registry: PieceKindRegistry,
}

impl PieceSpawner {
    /// Create a spawner over a registry.
    #[must_use]
    pub fn new(registry: PieceKindRegistry) -> Self {
        Self { registry }
    }

    /// Spawner for the standard vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(PieceKindRegistry::standard())
    }

    /// The kinds this spawner can create.
    #[must_use]
    pub fn registry(&self) -> &PieceKindRegistry {
        &self.registry
    }

    /// Spawn `stack` on `at`.
    ///
    /// Every code and the target square are checked before the first piece
    /// is created, so a failed call leaves `state` untouched.
    pub fn spawn_stack(
        &self,
        state: &mut GameState,
        stack: &[PieceSpec],
        at: Coordinate,
    ) -> Result<ColumnId, StackError> {
        let kinds = stack
            .iter()
            .map(|spec| {
                self.registry
                    .get(&spec.code)
                    .ok_or_else(|| StackError::UnknownPieceId(spec.code.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let Some((commander, rest)) = kinds.split_first() else {
            return Err(StackError::IllegalMove(format!(
                "cannot spawn an empty stack on {at}"
            )));
        };
        if let Some(resident) = state.board().column_at(at)? {
            return Err(StackError::IllegalMove(format!(
                "{at} is already held by {resident}"
            )));
        }

        let (_, column) = state.spawn_piece(commander, stack[0].notes.clone());
        for (kind, spec) in rest.iter().zip(&stack[1..]) {
            state.spawn_under(column, kind, spec.notes.clone())?;
        }
        state.register_column(column, at)?;

        trace!(%column, %at, pieces = stack.len(), "stack spawned");
        Ok(column)
    }
}

impl PieceVocabulary for PieceSpawner {
    fn recognizes(&self, code: &str) -> bool {
        self.registry.recognizes(code)
    }
}

impl ColumnSpawner for PieceSpawner {
    fn spawn_column(
        &mut self,
        state: &mut GameState,
        stack: &[PieceSpec],
        at: Coordinate,
    ) -> Result<ColumnId, StackError> {
        self.spawn_stack(state, stack, at)
    }
}
