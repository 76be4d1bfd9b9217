//! Game state: board, columns and pieces.
//!
//! ## Ownership
//!
//! `GameState` is the single owner of every piece and column. Both live in
//! id-keyed arenas; the board's squares and the pieces refer to columns by
//! [`ColumnId`], columns refer to pieces by [`PieceId`]. The stack algebra
//! (`add_on_top`, `take`, `split`, ...) is implemented on this type in
//! [`crate::columns`] because it touches all three at once.
//!
//! ## Spawning
//!
//! [`GameState::spawn_piece`] creates a piece wrapped in its own
//! single-piece column; [`GameState::spawn_under`] creates one beneath an
//! existing column. No piece is ever handed out detached.
//!
//! ## Events
//!
//! Every stack operation queues [`ColumnEvent`]s. Nothing clears the queue
//! except [`GameState::drain_events`]: a long-running caller must drain it
//! regularly (typically once per frame or per finished move) or it grows
//! without bound.
//!
//! ## Snapshots
//!
//! The state serializes with serde; [`GameState::to_bytes`] and
//! [`GameState::from_bytes`] use `bincode`. Queued column events are not
//! part of a snapshot.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::entity::{ColumnId, PieceId};
use super::error::StackError;
use crate::board::Board;
use crate::columns::{Column, ColumnEvent};
use crate::pieces::{Piece, PieceKind};

/// Complete logical state of a board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Squares and highlights.
    pub(crate) board: Board,

    /// Live columns by id.
    pub(crate) columns: FxHashMap<ColumnId, Column>,

    /// Every spawned piece by id.
    pub(crate) pieces: FxHashMap<PieceId, Piece>,

    next_piece_id: u32,
    next_column_id: u32,

    /// Pending notifications for the presentation layer. Grows until
    /// drained.
    #[serde(skip)]
    pub(crate) events: Vec<ColumnEvent>,
}

impl GameState {
    /// Create an empty state on a fully registered board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self::with_board(Board::new(config))
    }

    /// Create an empty state on an existing board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            columns: FxHashMap::default(),
            pieces: FxHashMap::default(),
            next_piece_id: 0,
            next_column_id: 0,
            events: Vec::new(),
        }
    }

    // === Board ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for highlighting.
    ///
    /// Square occupancy cannot be changed through this handle.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        self.board.config()
    }

    // === Entity Management ===

    /// Spawn a piece of `kind`, wrapped in a fresh single-piece column.
    ///
    /// The column has no square yet; place it with `register_column`.
    pub fn spawn_piece(&mut self, kind: &PieceKind, notes: Option<String>) -> (PieceId, ColumnId) {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id += 1;
        self.pieces.insert(id, Piece::new(id, kind, notes));

        let column = self.alloc_column(id);
        (id, column)
    }

    /// Spawn a piece of `kind` directly beneath the bottom of `column`.
    pub fn spawn_under(
        &mut self,
        column: ColumnId,
        kind: &PieceKind,
        notes: Option<String>,
    ) -> Result<PieceId, StackError> {
        if !self.is_live(column) {
            return Err(super::error::violation(format!(
                "{column} was already destroyed"
            )));
        }

        let id = PieceId(self.next_piece_id);
        self.next_piece_id += 1;
        self.pieces.insert(id, Piece::new(id, kind, notes));
        self.take_piece(column, id)?;
        Ok(id)
    }

    /// Create a column holding only `commander` and link the piece to it.
    pub(crate) fn alloc_column(&mut self, commander: PieceId) -> ColumnId {
        let id = ColumnId(self.next_column_id);
        self.next_column_id += 1;
        self.columns.insert(id, Column::new(id, commander));
        if let Some(piece) = self.pieces.get_mut(&commander) {
            piece.set_column(Some(id));
        }
        self.events.push(ColumnEvent::Created {
            column: id,
            commander,
        });
        id
    }

    /// Get a piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Get a live column.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id)
    }

    /// Check whether a column is still alive.
    #[must_use]
    pub fn is_live(&self, id: ColumnId) -> bool {
        self.columns.contains_key(&id)
    }

    /// Iterate over live columns (unordered).
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Iterate over all pieces (unordered).
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Number of live columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of spawned pieces still in the game.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Pieces released from a column and not yet re-homed.
    pub fn detached_pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces
            .values()
            .filter(|p| !p.has_column())
            .map(Piece::id)
    }

    /// Sorted ids of every piece held by a live column.
    ///
    /// Stack operations never change this list.
    #[must_use]
    pub fn pieces_in_columns(&self) -> Vec<PieceId> {
        let mut all: Vec<_> = self
            .columns
            .values()
            .flat_map(|c| c.pieces().iter().copied())
            .collect();
        all.sort_unstable();
        all
    }

    /// The column on the square named by `text`.
    pub fn column_named(&self, text: &str) -> Result<Option<&Column>, StackError> {
        let coord = self.board.parse_coordinate(text)?;
        Ok(self
            .board
            .column_at(coord)?
            .and_then(|id| self.columns.get(&id)))
    }

    // === Events ===

    /// Pending column events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ColumnEvent] {
        &self.events
    }

    /// Take all pending column events, leaving the queue empty.
    ///
    /// The queue is never trimmed otherwise.
    pub fn drain_events(&mut self) -> Vec<ColumnEvent> {
        std::mem::take(&mut self.events)
    }

    // === Invariants ===

    /// Verify the structural invariants.
    ///
    /// - every live column is non-empty and every piece in it links back
    /// - no piece is held by two columns
    /// - every square's resident column is live and refers to that square
    pub fn check_invariants(&self) -> Result<(), StackError> {
        let broken = |detail: String| Err(StackError::InvariantViolation(detail));
        let mut seen = FxHashSet::default();

        for column in self.columns.values() {
            if column.is_empty() {
                return broken(format!("{} is empty but alive", column.id()));
            }
            for &p in column.pieces() {
                if !seen.insert(p) {
                    return broken(format!("{p} is held by two columns"));
                }
                match self.pieces.get(&p) {
                    Some(piece) if piece.column() == Some(column.id()) => {}
                    _ => return broken(format!("{p} does not link back to {}", column.id())),
                }
            }
        }

        for (coord, id) in self.board.occupied() {
            match self.columns.get(&id) {
                Some(column) if column.square() == Some(coord) => {}
                Some(_) => return broken(format!("{id} is resident on {coord} but refers elsewhere")),
                None => return broken(format!("destroyed {id} is still resident on {coord}")),
            }
        }

        Ok(())
    }

    // === Snapshots ===

    /// Serialize the state with bincode.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore a state serialized with [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
