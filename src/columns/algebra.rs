//! The stack algebra: merging, splitting and capturing columns.
//!
//! Every operation here is a method on [`GameState`] because it has to move
//! pieces between columns, keep the pieces' back-links in sync and update
//! square occupancy in one step. Operations run to completion before they
//! return; there is no observable half-merged or half-captured state.
//!
//! ## Primitives
//!
//! - `release_top` / `release_bottom` detach one piece. A column that loses
//!   its last piece is destroyed on the spot, giving up its square if it was
//!   the resident.
//! - `add_on_top_piece` / `take_piece` attach a detached piece above the
//!   commander or below the bottom.
//!
//! All the other operations are loops over these four.
//!
//! ## Contract
//!
//! Using a destroyed column, attaching a piece that is still attached, or
//! splitting at a piece the column does not hold are caller bugs. They are
//! reported through [`StackError::InvariantViolation`], which panics in
//! debug builds.

use tracing::debug;

use super::column::Column;
use super::event::ColumnEvent;
use crate::core::error::violation;
use crate::core::{ColumnId, Coordinate, GameState, PieceId, StackError};

impl GameState {
    fn live(&self, column: ColumnId) -> Result<&Column, StackError> {
        self.columns
            .get(&column)
            .ok_or_else(|| violation(format!("{column} was already destroyed")))
    }

    fn live_mut(&mut self, column: ColumnId) -> Result<&mut Column, StackError> {
        self.columns
            .get_mut(&column)
            .ok_or_else(|| violation(format!("{column} was already destroyed")))
    }

    fn ensure_detached(&self, piece: PieceId) -> Result<(), StackError> {
        match self.pieces.get(&piece) {
            None => Err(violation(format!("{piece} does not exist"))),
            Some(p) => match p.column() {
                Some(owner) => Err(violation(format!("{piece} still belongs to {owner}"))),
                None => Ok(()),
            },
        }
    }

    fn link(&mut self, piece: PieceId, column: Option<ColumnId>) {
        if let Some(p) = self.pieces.get_mut(&piece) {
            p.set_column(column);
        }
    }

    /// Column a piece belongs to.
    #[must_use]
    pub fn column_of(&self, piece: PieceId) -> Option<ColumnId> {
        self.pieces.get(&piece).and_then(|p| p.column())
    }

    // === Square Assignment ===

    /// Move a column's square reference and claim the new square.
    ///
    /// The old square is cleared only if this column is its resident. The
    /// new square, if any, must be empty or already held by this column.
    pub fn assign_square(
        &mut self,
        column: ColumnId,
        square: Option<Coordinate>,
    ) -> Result<(), StackError> {
        let current = self.live(column)?.square();

        match square {
            Some(target) => match self.board.square_at(target)?.column() {
                Some(resident) if resident == column && current == square => return Ok(()),
                Some(resident) if resident != column => {
                    return Err(violation(format!(
                        "{target} is held by {resident}, {column} cannot claim it"
                    )));
                }
                _ => {}
            },
            None if current.is_none() => return Ok(()),
            None => {}
        }

        if let Some(old) = current {
            self.vacate(column, old);
        }
        self.live_mut(column)?.set_square(square);
        if let Some(target) = square {
            self.board.square_mut(target)?.place_column(column);
        }
        Ok(())
    }

    /// Update only the column's square reference.
    ///
    /// Square occupancy is untouched, so the column can be "on" a square
    /// another column officially holds. Used while a column is in flight.
    pub fn assign_square_silently(
        &mut self,
        column: ColumnId,
        square: Option<Coordinate>,
    ) -> Result<(), StackError> {
        self.live_mut(column)?.set_square(square);
        Ok(())
    }

    /// Place a freshly spawned column on its square.
    ///
    /// Queues [`ColumnEvent::Registered`] so the owner of the new pieces can
    /// add them to its inventory.
    pub fn register_column(&mut self, column: ColumnId, at: Coordinate) -> Result<(), StackError> {
        self.assign_square(column, Some(at))?;
        debug!(%column, %at, "column registered");
        self.events.push(ColumnEvent::Registered { column, at });
        Ok(())
    }

    fn vacate(&mut self, column: ColumnId, coord: Coordinate) {
        if let Ok(square) = self.board.square_mut(coord) {
            if square.column() == Some(column) {
                square.clear();
            }
        }
    }

    // === Stacking ===

    /// Wrap a detached piece in a new single-piece column.
    pub fn wrap(&mut self, piece: PieceId) -> Result<ColumnId, StackError> {
        self.ensure_detached(piece)?;
        Ok(self.alloc_column(piece))
    }

    /// Put a detached piece on top; it becomes the commander.
    pub fn add_on_top_piece(&mut self, column: ColumnId, piece: PieceId) -> Result<(), StackError> {
        self.live(column)?;
        self.ensure_detached(piece)?;
        self.live_mut(column)?.push_top(piece);
        self.link(piece, Some(column));
        Ok(())
    }

    /// Stack all of `other` on top of `column`.
    ///
    /// `other` keeps its internal order: its commander becomes the new
    /// commander and its old bottom lands directly on `column`'s old
    /// commander. `other` is destroyed.
    pub fn add_on_top(&mut self, column: ColumnId, other: ColumnId) -> Result<(), StackError> {
        if column == other {
            return Err(violation(format!("{column} cannot be stacked onto itself")));
        }
        self.live(column)?;
        self.live(other)?;

        while self.is_live(other) {
            let piece = self.release_bottom(other)?;
            self.add_on_top_piece(column, piece)?;
        }
        Ok(())
    }

    /// Put all of `other` beneath `column`, keeping `other`'s order.
    /// `other` is destroyed.
    pub fn add_to_bottom(&mut self, column: ColumnId, other: ColumnId) -> Result<(), StackError> {
        if column == other {
            return Err(violation(format!("{column} cannot be stacked under itself")));
        }
        self.live(column)?;
        self.live(other)?;

        while self.is_live(other) {
            self.take(column, other)?;
        }
        Ok(())
    }

    /// Capture `other`'s commander: release it and append it to `column`'s
    /// bottom. Returns the captured piece.
    ///
    /// With `column == other` the commander rotates to the bottom; a
    /// single-piece column cannot take itself.
    pub fn take(&mut self, column: ColumnId, other: ColumnId) -> Result<PieceId, StackError> {
        self.live(column)?;
        if column == other && self.live(other)?.len() == 1 {
            return Err(violation(format!("{column} cannot take its only piece")));
        }

        let piece = self.release_top(other)?;
        self.take_piece(column, piece)?;
        Ok(piece)
    }

    /// Append a detached piece to `column`'s bottom.
    ///
    /// If the piece is still attached somewhere, this captures the
    /// commander of the piece's column instead, so the call always resolves
    /// to moving one top piece onto this bottom.
    pub fn take_piece(&mut self, column: ColumnId, piece: PieceId) -> Result<(), StackError> {
        let owner = self
            .pieces
            .get(&piece)
            .ok_or_else(|| violation(format!("{piece} does not exist")))?
            .column();

        if let Some(owner) = owner {
            self.take(column, owner)?;
            return Ok(());
        }

        self.live_mut(column)?.push_bottom(piece);
        self.link(piece, Some(column));
        self.recenter_anchor(column);
        Ok(())
    }

    // === Releasing ===

    /// Detach and return the commander.
    ///
    /// Destroys the column if it was the last piece.
    pub fn release_top(&mut self, column: ColumnId) -> Result<PieceId, StackError> {
        let piece = self
            .live_mut(column)?
            .pop_top()
            .ok_or_else(|| violation(format!("{column} has no pieces")))?;
        Ok(self.release(column, piece))
    }

    /// Detach and return the bottom piece.
    ///
    /// Re-anchors the column on its new bottom, or destroys it if it was the
    /// last piece.
    pub fn release_bottom(&mut self, column: ColumnId) -> Result<PieceId, StackError> {
        let col = self.live_mut(column)?;
        let piece = col
            .pop_bottom()
            .ok_or_else(|| violation(format!("{column} has no pieces")))?;
        if !col.is_empty() {
            self.recenter_anchor(column);
        }
        Ok(self.release(column, piece))
    }

    fn release(&mut self, column: ColumnId, piece: PieceId) -> PieceId {
        self.link(piece, None);
        if self.columns.get(&column).is_some_and(Column::is_empty) {
            self.destroy(column);
        }
        piece
    }

    /// Remove a column from the arena and give up its square.
    fn destroy(&mut self, column: ColumnId) {
        let Some(col) = self.columns.remove(&column) else {
            return;
        };

        let resident_at = col
            .square()
            .filter(|&c| self.board.column_at(c).ok().flatten() == Some(column))
            .or_else(|| {
                self.board
                    .occupied()
                    .find(|&(_, id)| id == column)
                    .map(|(c, _)| c)
            });
        if let Some(coord) = resident_at {
            self.vacate(column, coord);
        }

        debug!(%column, "column destroyed");
        self.events.push(ColumnEvent::Destroyed { column });
    }

    /// Anchor the column on its current bottom piece.
    fn recenter_anchor(&mut self, column: ColumnId) {
        let Some(col) = self.columns.get_mut(&column) else {
            return;
        };
        if col.is_empty() {
            return;
        }
        let bottom = col.bottom();
        col.set_anchor(bottom);
        self.events.push(ColumnEvent::Reanchored { column, bottom });
    }

    // === Splitting ===

    /// Split at `until`, counting from the top or from the bottom.
    ///
    /// See [`split_from_top`](Self::split_from_top) and
    /// [`split_from_bottom`](Self::split_from_bottom).
    pub fn split(
        &mut self,
        column: ColumnId,
        until: PieceId,
        from_bottom: bool,
    ) -> Result<ColumnId, StackError> {
        if from_bottom {
            self.split_from_bottom(column, until)
        } else {
            self.split_from_top(column, until)
        }
    }

    /// Separate everything from the commander down to and including
    /// `until` into a new column; `column` keeps the rest.
    ///
    /// Returns `column` unchanged when `until` is the commander (boundary
    /// no-op) or the bottom (the segment would be the whole column).
    pub fn split_from_top(&mut self, column: ColumnId, until: PieceId) -> Result<ColumnId, StackError> {
        let col = self.live(column)?;
        let len = col.len();
        let index = col
            .position_of(until)
            .ok_or_else(|| violation(format!("{until} is not in {column}")))?;

        if index == 0 || index + 1 == len {
            return Ok(column);
        }
        self.split_off(column, index + 1, false)
    }

    /// Separate everything from the bottom up to and including `until`
    /// into a new column; `column` keeps the rest.
    ///
    /// Returns `column` unchanged when `until` is the bottom (boundary
    /// no-op) or the commander (the segment would be the whole column).
    pub fn split_from_bottom(
        &mut self,
        column: ColumnId,
        until: PieceId,
    ) -> Result<ColumnId, StackError> {
        let col = self.live(column)?;
        let len = col.len();
        let index = col
            .position_of(until)
            .ok_or_else(|| violation(format!("{until} is not in {column}")))?;

        if index == 0 || index + 1 == len {
            return Ok(column);
        }
        self.split_off(column, len - index, true)
    }

    /// Separate exactly `count` pieces from the top (or bottom) into a new
    /// column, preserving their order.
    ///
    /// `count == len` returns `column` itself. The new column has no square;
    /// callers usually give it the old one with
    /// [`assign_square_silently`](Self::assign_square_silently).
    pub fn split_off(
        &mut self,
        column: ColumnId,
        count: usize,
        from_bottom: bool,
    ) -> Result<ColumnId, StackError> {
        let len = self.live(column)?.len();
        if count == 0 || count > len {
            return Err(violation(format!(
                "cannot split {count} of {len} pieces off {column}"
            )));
        }
        if count == len {
            return Ok(column);
        }

        let segment = if from_bottom {
            let first = self.release_bottom(column)?;
            let segment = self.alloc_column(first);
            for _ in 1..count {
                let piece = self.release_bottom(column)?;
                self.add_on_top_piece(segment, piece)?;
            }
            segment
        } else {
            let first = self.release_top(column)?;
            let segment = self.alloc_column(first);
            for _ in 1..count {
                self.take(segment, column)?;
            }
            segment
        };

        debug!(%column, %segment, count, from_bottom, "column split");
        Ok(segment)
    }

    // === Removal ===

    /// Delete a column together with its pieces.
    ///
    /// Returns the removed pieces, top first.
    pub fn remove_column(&mut self, column: ColumnId) -> Result<Vec<PieceId>, StackError> {
        let pieces = self.live(column)?.pieces().to_vec();
        for piece in &pieces {
            self.pieces.remove(piece);
        }
        self.destroy(column);
        Ok(pieces)
    }
}
