//! The move maker: selection, move requests and their two-phase execution.
//!
//! ## Two Phases
//!
//! A request (`move_to`, `merge_onto`, `capture`, ...) only validates the
//! move and records a plan. It fires `on_move_started` and locks input;
//! nothing on the board changes yet, so the presentation layer can animate
//! freely. [`MoveMaker::finish`] then applies the whole logical transition
//! in one call, fires `on_move_ended` and unlocks input. Every request made
//! while a move is pending fails with [`StackError::InputLocked`].
//!
//! ## Segments
//!
//! Moves carry a *segment* of the selected column. With no split selection
//! the segment is the commander plus the run of capturable pieces directly
//! beneath it; anything from the first non-capturable piece down stays
//! behind. `select_top_piece` / `select_bottom_piece` pick the split
//! boundary explicitly.

use im::Vector;
use tracing::{debug, info};

use super::descriptor::MoveDescriptor;
use super::listener::MoveListener;
use crate::board::Highlight;
use crate::columns::Column;
use crate::core::{ColumnId, Coordinate, GameState, PieceId, StackError};
use crate::notation::{decode_stack, NotationError};
use crate::pieces::{ColumnSpawner, Piece};

/// Explicit split boundary within the selected column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitSelection {
    /// Index of the boundary piece, 0 being the commander.
    pub index: usize,
    /// Whether the segment runs from the boundary down to the bottom
    /// instead of from the commander down to the boundary.
    pub from_bottom: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Relocate { to: Coordinate },
    Merge { onto: ColumnId },
    Capture { target: ColumnId },
    DeliverUnder { target: ColumnId },
    /// Everything above the bottom moves; the bottom stays as its own column.
    LeaveBottom { to: Coordinate },
    /// Pieces from `start` down to just above the bottom move; the bottom
    /// rejoins the part that stays.
    LeaveRun { start: usize, to: Coordinate },
}

#[derive(Clone, Copy, Debug)]
struct MovePlan {
    descriptor: MoveDescriptor,
    column: ColumnId,
    from: Coordinate,
    /// `(count, from_bottom)` to split off first; `None` moves the whole column.
    segment: Option<(usize, bool)>,
    transition: Transition,
}

/// Drives moves on a [`GameState`] on behalf of one player's input.
#[derive(Clone, Debug)]
pub struct MoveMaker<L = ()> {
    listener: L,
    selected: Option<ColumnId>,
    split: Option<SplitSelection>,
    pending: Option<MovePlan>,
    history: Vector<MoveDescriptor>,
}

impl MoveMaker<()> {
    /// A move maker without listener.
    #[must_use]
    pub fn new() -> Self {
        Self::with_listener(())
    }
}

impl Default for MoveMaker<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: MoveListener> MoveMaker<L> {
    /// A move maker notifying `listener`.
    #[must_use]
    pub fn with_listener(listener: L) -> Self {
        Self {
            listener,
            selected: None,
            split: None,
            pending: None,
            history: Vector::new(),
        }
    }

    /// The listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable listener access.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// The selected column.
    #[must_use]
    pub fn selected(&self) -> Option<ColumnId> {
        self.selected
    }

    /// The explicit split boundary, if any.
    #[must_use]
    pub fn split_selection(&self) -> Option<SplitSelection> {
        self.split
    }

    /// Check whether a move is waiting for [`finish`](Self::finish).
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// Descriptor of the move waiting for `finish`.
    #[must_use]
    pub fn pending(&self) -> Option<&MoveDescriptor> {
        self.pending.as_ref().map(|p| &p.descriptor)
    }

    /// Finished moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveDescriptor> {
        &self.history
    }

    // === Selection ===

    /// Select the column on `at`, or deselect it if it is already selected.
    ///
    /// Returns the selection after the call. Any split boundary is reset.
    pub fn select(
        &mut self,
        state: &mut GameState,
        at: Coordinate,
    ) -> Result<Option<ColumnId>, StackError> {
        self.ensure_unlocked()?;
        let column = column_on(state, at)?;

        state.board_mut().unmark_all();
        self.split = None;
        if self.selected == Some(column) {
            self.selected = None;
        } else {
            state.board_mut().mark_square(at, Highlight::Selected)?;
            self.selected = Some(column);
        }
        Ok(self.selected)
    }

    /// Drop the selection and its highlight.
    pub fn deselect(&mut self, state: &mut GameState) {
        if self.pending.is_none() {
            state.board_mut().unmark_all();
            self.selected = None;
            self.split = None;
        }
    }

    /// Extend a top split boundary one piece down, or start one at the
    /// commander.
    pub fn select_top_piece(&mut self, state: &GameState) -> Result<SplitSelection, StackError> {
        self.ensure_unlocked()?;
        let (column, _) = self.selection(state)?;
        let last = state.column(column).map_or(0, |c| c.len() - 1);

        let next = match self.split {
            Some(SplitSelection {
                index,
                from_bottom: false,
            }) => SplitSelection {
                index: (index + 1).min(last),
                from_bottom: false,
            },
            _ => SplitSelection {
                index: 0,
                from_bottom: false,
            },
        };
        self.split = Some(next);
        Ok(next)
    }

    /// Extend a bottom split boundary one piece up, or start one at the
    /// bottom.
    pub fn select_bottom_piece(&mut self, state: &GameState) -> Result<SplitSelection, StackError> {
        self.ensure_unlocked()?;
        let (column, _) = self.selection(state)?;
        let last = state.column(column).map_or(0, |c| c.len() - 1);

        let next = match self.split {
            Some(SplitSelection {
                index,
                from_bottom: true,
            }) => SplitSelection {
                index: index.saturating_sub(1),
                from_bottom: true,
            },
            _ => SplitSelection {
                index: last,
                from_bottom: true,
            },
        };
        self.split = Some(next);
        Ok(next)
    }

    /// Forget the split boundary; moves use the default segment again.
    pub fn clear_split(&mut self) {
        self.split = None;
    }

    // === Move Requests ===

    /// Move the selected segment to the empty square `to`.
    pub fn move_to(
        &mut self,
        state: &mut GameState,
        to: Coordinate,
    ) -> Result<MoveDescriptor, StackError> {
        self.ensure_unlocked()?;
        let (column, from) = self.selection(state)?;
        ensure_empty(state, to)?;

        let plan = MovePlan {
            descriptor: MoveDescriptor::new(from, to),
            column,
            from,
            segment: self.segment(state, column),
            transition: Transition::Relocate { to },
        };
        self.begin(state, plan)
    }

    /// Jump the selected segment on top of the column on `at`.
    pub fn merge_onto(
        &mut self,
        state: &mut GameState,
        at: Coordinate,
    ) -> Result<MoveDescriptor, StackError> {
        self.ensure_unlocked()?;
        let (column, from) = self.selection(state)?;
        let onto = column_on(state, at)?;
        if onto == column {
            return Err(StackError::IllegalMove(format!(
                "{column} cannot merge onto itself"
            )));
        }

        let plan = MovePlan {
            descriptor: MoveDescriptor::new(from, at),
            column,
            from,
            segment: self.segment(state, column),
            transition: Transition::Merge { onto },
        };
        self.begin(state, plan)
    }

    /// Capture the commander of the column on `at` with the whole selected
    /// column, which then returns to its square.
    ///
    /// Capturing on the selected column's own square rotates its commander
    /// to the bottom. The split selection is ignored.
    pub fn capture(
        &mut self,
        state: &mut GameState,
        at: Coordinate,
    ) -> Result<MoveDescriptor, StackError> {
        self.ensure_unlocked()?;
        let (column, from) = self.selection(state)?;
        let target = column_on(state, at)?;
        if target == column && state.column(column).map_or(0, Column::len) <= 1 {
            return Err(StackError::IllegalMove(format!(
                "{column} cannot capture its only piece"
            )));
        }

        let plan = MovePlan {
            descriptor: MoveDescriptor::new(from, at).returning_to(from),
            column,
            from,
            segment: None,
            transition: Transition::Capture { target },
        };
        self.begin(state, plan)
    }

    /// Put the selected segment beneath the column on `at`.
    ///
    /// The receiving column does the moving: the descriptor reads
    /// `target-from-target`.
    pub fn deliver_under(
        &mut self,
        state: &mut GameState,
        at: Coordinate,
    ) -> Result<MoveDescriptor, StackError> {
        self.ensure_unlocked()?;
        let (column, from) = self.selection(state)?;
        let target = column_on(state, at)?;
        let segment = self.segment(state, column);

        if target == column && !matches!(segment, Some((_, false))) {
            return Err(StackError::IllegalMove(format!(
                "only a top segment of {column} can go under {column}"
            )));
        }

        let plan = MovePlan {
            descriptor: MoveDescriptor::new(at, from).returning_to(at),
            column,
            from,
            segment,
            transition: Transition::DeliverUnder { target },
        };
        self.begin(state, plan)
    }

    /// Move the selected column to the empty square `to`, leaving its
    /// bottom piece behind.
    ///
    /// Walks up from the piece above the bottom while pieces are
    /// capturable. If the walk reaches the commander, everything but the
    /// bottom moves and the bottom stays as its own column. Otherwise the
    /// walk stops on a fixed piece: that piece and everything beneath it,
    /// bottom excepted, moves, and the bottom rejoins the part that stays.
    pub fn move_all_but_bottom(
        &mut self,
        state: &mut GameState,
        to: Coordinate,
    ) -> Result<MoveDescriptor, StackError> {
        self.ensure_unlocked()?;
        let (column, from) = self.selection(state)?;
        if self.split.is_some() {
            return Err(StackError::IllegalMove(
                "clear the split selection first".into(),
            ));
        }
        ensure_empty(state, to)?;

        let col = state.column(column).ok_or(StackError::NothingSelected)?;
        let len = col.len();
        let transition = if len == 1 {
            Transition::Relocate { to }
        } else {
            let mut index = len - 2;
            while index > 0 && is_capturable(state, col.pieces()[index]) {
                index -= 1;
            }

            if index == 0 {
                Transition::LeaveBottom { to }
            } else {
                Transition::LeaveRun { start: index, to }
            }
        };

        let plan = MovePlan {
            descriptor: MoveDescriptor::new(from, to),
            column,
            from,
            segment: None,
            transition,
        };
        self.begin(state, plan)
    }

    /// Apply the pending move.
    ///
    /// Unlocks input and clears the selection even if the transition fails;
    /// a failure here means the board was changed behind the move maker's
    /// back.
    pub fn finish(&mut self, state: &mut GameState) -> Result<MoveDescriptor, StackError> {
        let plan = self
            .pending
            .take()
            .ok_or_else(|| StackError::IllegalMove("no move in progress".into()))?;

        let result = apply(state, &plan);
        state.board_mut().unmark_all();
        self.selected = None;
        self.split = None;
        self.listener.on_move_ended(&plan.descriptor);
        result?;

        info!(descriptor = %plan.descriptor, "move finished");
        self.history.push_back(plan.descriptor);
        Ok(plan.descriptor)
    }

    // === Editing ===

    /// Spawn the stack `spec` (e.g. `"g+G"`) on the empty square `at`.
    ///
    /// Only allowed while nothing is selected.
    pub fn spawn<S: ColumnSpawner>(
        &mut self,
        state: &mut GameState,
        spawner: &mut S,
        at: Coordinate,
        spec: &str,
    ) -> Result<ColumnId, NotationError> {
        self.ensure_idle()?;
        let stack = decode_stack(spec, &*spawner)?;
        Ok(spawner.spawn_column(state, &stack, at)?)
    }

    /// Delete the column on `at` together with its pieces.
    ///
    /// Only allowed while nothing is selected.
    pub fn delete(
        &mut self,
        state: &mut GameState,
        at: Coordinate,
    ) -> Result<Vec<PieceId>, StackError> {
        self.ensure_idle()?;
        let column = column_on(state, at)?;
        state.remove_column(column)
    }

    // === Internals ===

    fn ensure_unlocked(&self) -> Result<(), StackError> {
        if self.pending.is_some() {
            Err(StackError::InputLocked)
        } else {
            Ok(())
        }
    }

    fn ensure_idle(&self) -> Result<(), StackError> {
        self.ensure_unlocked()?;
        match self.selected {
            Some(column) => Err(StackError::IllegalMove(format!(
                "{column} is selected"
            ))),
            None => Ok(()),
        }
    }

    fn selection(&self, state: &GameState) -> Result<(ColumnId, Coordinate), StackError> {
        let column = self.selected.ok_or(StackError::NothingSelected)?;
        let from = state
            .column(column)
            .and_then(Column::square)
            .ok_or(StackError::NothingSelected)?;
        Ok((column, from))
    }

    /// Pieces to split off the selected column, or `None` for all of it.
    fn segment(&self, state: &GameState, column: ColumnId) -> Option<(usize, bool)> {
        let col = state.column(column)?;
        let len = col.len();

        let (count, from_bottom) = match self.split {
            Some(SplitSelection {
                index,
                from_bottom: false,
            }) => ((index + 1).min(len), false),
            Some(SplitSelection {
                index,
                from_bottom: true,
            }) => (len.saturating_sub(index).max(1), true),
            None => {
                let run = col.pieces()[1..]
                    .iter()
                    .take_while(|&&p| is_capturable(state, p))
                    .count();
                (1 + run, false)
            }
        };

        (count < len).then_some((count, from_bottom))
    }

    fn begin(
        &mut self,
        state: &mut GameState,
        plan: MovePlan,
    ) -> Result<MoveDescriptor, StackError> {
        let descriptor = plan.descriptor;
        let board = state.board_mut();
        board.unmark_all();
        board.mark_square(descriptor.to, Highlight::Destination)?;

        debug!(%descriptor, "move started");
        self.listener.on_move_started(&descriptor);
        self.pending = Some(plan);
        Ok(descriptor)
    }
}

fn column_on(state: &GameState, at: Coordinate) -> Result<ColumnId, StackError> {
    state
        .board()
        .column_at(at)?
        .ok_or_else(|| StackError::IllegalMove(format!("{at} is empty")))
}

fn ensure_empty(state: &GameState, at: Coordinate) -> Result<(), StackError> {
    match state.board().column_at(at)? {
        Some(resident) => Err(StackError::IllegalMove(format!(
            "{at} is held by {resident}"
        ))),
        None => Ok(()),
    }
}

fn is_capturable(state: &GameState, piece: PieceId) -> bool {
    state.piece(piece).is_some_and(Piece::is_capturable)
}

fn apply(state: &mut GameState, plan: &MovePlan) -> Result<(), StackError> {
    let MovePlan {
        column,
        from,
        segment,
        transition,
        ..
    } = *plan;

    let moving = match segment {
        Some((count, from_bottom)) => {
            let split = state.split_off(column, count, from_bottom)?;
            if split != column {
                state.assign_square_silently(split, Some(from))?;
            }
            split
        }
        None => column,
    };

    match transition {
        Transition::Relocate { to } => state.assign_square(moving, Some(to)),
        Transition::Merge { onto } => state.add_on_top(onto, moving),
        Transition::Capture { target } => state.take(column, target).map(|_| ()),
        Transition::DeliverUnder { target } => state.add_to_bottom(target, moving),
        Transition::LeaveBottom { to } => {
            let bottom = state.release_bottom(column)?;
            let left = state.wrap(bottom)?;
            state.assign_square(column, Some(to))?;
            state.assign_square(left, Some(from))
        }
        Transition::LeaveRun { start, to } => {
            let len = state.column(column).map_or(0, Column::len);
            let run = state.split_off(column, len - start, true)?;
            let bottom = state.release_bottom(run)?;
            state.take_piece(column, bottom)?;
            state.assign_square_silently(run, Some(from))?;
            state.assign_square(run, Some(to))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;
    use crate::interaction::RecordingListener;
    use crate::notation::load;
    use crate::pieces::PieceSpawner;

    fn setup(text: &str) -> GameState {
        let mut state = GameState::new(BoardConfig::standard(8, 8));
        load(text, &mut state, &mut PieceSpawner::standard()).unwrap();
        state.drain_events();
        state
    }

    fn at(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn codes(state: &GameState, square: &str) -> Vec<String> {
        match state.column_named(square).unwrap() {
            Some(column) => column
                .pieces()
                .iter()
                .map(|&p| state.piece(p).unwrap().code().to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    fn recording() -> MoveMaker<RecordingListener> {
        MoveMaker::with_listener(RecordingListener::default())
    }

    #[test]
    fn test_select_toggles() {
        let mut state = setup("1|g");
        let mut maker = MoveMaker::new();

        let column = maker.select(&mut state, at("a8")).unwrap();
        assert!(column.is_some());
        assert_eq!(state.board().highlight_at(at("a8")), Some(Highlight::Selected));

        assert_eq!(maker.select(&mut state, at("a8")).unwrap(), None);
        assert_eq!(state.board().highlight_at(at("a8")), None);
    }

    #[test]
    fn test_select_empty_square_fails() {
        let mut state = setup("1|g");
        let mut maker = MoveMaker::new();
        assert!(matches!(
            maker.select(&mut state, at("b8")),
            Err(StackError::IllegalMove(_))
        ));
    }

    #[test]
    fn test_move_is_two_phase() {
        let mut state = setup("1|g+r");
        let mut maker = recording();
        maker.select(&mut state, at("a8")).unwrap();

        let descriptor = maker.move_to(&mut state, at("a6")).unwrap();
        assert_eq!(descriptor.to_string(), "a8-a6");
        assert!(maker.is_locked());
        assert_eq!(maker.listener().started, vec![descriptor]);
        assert!(maker.listener().ended.is_empty());

        // Nothing moved yet.
        assert_eq!(codes(&state, "a8"), ["g", "r"]);
        assert_eq!(
            maker.select(&mut state, at("a8")),
            Err(StackError::InputLocked)
        );

        maker.finish(&mut state).unwrap();
        assert!(!maker.is_locked());
        assert_eq!(maker.listener().ended, vec![descriptor]);
        assert_eq!(codes(&state, "a8"), Vec::<String>::new());
        assert_eq!(codes(&state, "a6"), ["g", "r"]);
        assert_eq!(maker.selected(), None);
        assert_eq!(maker.history().len(), 1);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_default_segment_leaves_fixed_pieces() {
        let mut state = setup("1|g+B+r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.move_to(&mut state, at("a6")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a6"), ["g"]);
        assert_eq!(codes(&state, "a8"), ["B", "r"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_move_to_occupied_square_fails() {
        let mut state = setup("1|g,r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        assert!(maker.move_to(&mut state, at("b8")).is_err());
        assert!(!maker.is_locked());
    }

    #[test]
    fn test_merge_onto() {
        let mut state = setup("1|g,r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();

        let descriptor = maker.merge_onto(&mut state, at("b8")).unwrap();
        assert_eq!(descriptor.to_string(), "a8-b8");
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "b8"), ["g", "r"]);
        assert!(state.board().column_at(at("a8")).unwrap().is_none());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_merge_bottom_piece_only() {
        let mut state = setup("1|g+c+y,r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.select_bottom_piece(&state).unwrap();
        maker.merge_onto(&mut state, at("b8")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a8"), ["g", "c"]);
        assert_eq!(codes(&state, "b8"), ["y", "r"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_capture_returns_home() {
        let mut state = setup("1|g,r+y");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();

        let descriptor = maker.capture(&mut state, at("b8")).unwrap();
        assert_eq!(descriptor.to_string(), "a8-b8-a8");
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a8"), ["g", "r"]);
        assert_eq!(codes(&state, "b8"), ["y"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_capture_last_piece_clears_square() {
        let mut state = setup("1|g,r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.capture(&mut state, at("b8")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a8"), ["g", "r"]);
        assert!(state.board().column_at(at("b8")).unwrap().is_none());
        assert_eq!(state.column_count(), 1);
    }

    #[test]
    fn test_capture_self_needs_two_pieces() {
        let mut state = setup("1|g");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        assert!(maker.capture(&mut state, at("a8")).is_err());
    }

    #[test]
    fn test_deliver_under() {
        let mut state = setup("1|g+c+y,r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.select_bottom_piece(&state).unwrap();

        let descriptor = maker.deliver_under(&mut state, at("b8")).unwrap();
        assert_eq!(descriptor.to_string(), "b8-a8-b8");
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "b8"), ["r", "y"]);
        assert_eq!(codes(&state, "a8"), ["g", "c"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_deliver_top_under_self_rotates() {
        let mut state = setup("1|g+c+y");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.select_top_piece(&state).unwrap();
        maker.deliver_under(&mut state, at("a8")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a8"), ["c", "y", "g"]);

        maker.select(&mut state, at("a8")).unwrap();
        maker.select_bottom_piece(&state).unwrap();
        assert!(maker.deliver_under(&mut state, at("a8")).is_err());
    }

    #[test]
    fn test_split_selection_steps() {
        let mut state = setup("1|g+c+y");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();

        assert_eq!(maker.select_top_piece(&state).unwrap().index, 0);
        assert_eq!(maker.select_top_piece(&state).unwrap().index, 1);
        assert_eq!(maker.select_top_piece(&state).unwrap().index, 2);
        assert_eq!(maker.select_top_piece(&state).unwrap().index, 2);

        let bottom = maker.select_bottom_piece(&state).unwrap();
        assert_eq!((bottom.index, bottom.from_bottom), (2, true));
        assert_eq!(maker.select_bottom_piece(&state).unwrap().index, 1);

        maker.clear_split();
        assert_eq!(maker.split_selection(), None);
    }

    #[test]
    fn test_move_top_segment() {
        let mut state = setup("1|g+c+y");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.select_top_piece(&state).unwrap();
        maker.select_top_piece(&state).unwrap();
        maker.move_to(&mut state, at("c6")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "c6"), ["g", "c"]);
        assert_eq!(codes(&state, "a8"), ["y"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_move_all_but_bottom_leaves_bottom() {
        let mut state = setup("1|g+c+y");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.move_all_but_bottom(&mut state, at("a6")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a6"), ["g", "c"]);
        assert_eq!(codes(&state, "a8"), ["y"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_move_all_but_bottom_stops_at_fixed_piece() {
        let mut state = setup("1|g+B+c+y+r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.move_all_but_bottom(&mut state, at("a6")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a6"), ["B", "c", "y"]);
        assert_eq!(codes(&state, "a8"), ["g", "r"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_move_all_but_bottom_fixed_piece_above_bottom() {
        let mut state = setup("1|g+c+B+r");
        let mut maker = MoveMaker::new();
        maker.select(&mut state, at("a8")).unwrap();
        maker.move_all_but_bottom(&mut state, at("a6")).unwrap();
        maker.finish(&mut state).unwrap();

        assert_eq!(codes(&state, "a6"), ["B"]);
        assert_eq!(codes(&state, "a8"), ["g", "c", "r"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_finish_without_move() {
        let mut state = setup("1|g");
        let mut maker = MoveMaker::new();
        assert!(maker.finish(&mut state).is_err());
    }

    #[test]
    fn test_spawn_and_delete() {
        let mut state = setup("1|g");
        let mut maker = MoveMaker::new();
        let mut spawner = PieceSpawner::standard();

        maker.spawn(&mut state, &mut spawner, at("d4"), "R;boss+h").unwrap();
        assert_eq!(codes(&state, "d4"), ["R", "h"]);

        let removed = maker.delete(&mut state, at("d4")).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(state.piece_count(), 1);
        assert!(state.check_invariants().is_ok());

        maker.select(&mut state, at("a8")).unwrap();
        assert!(maker.delete(&mut state, at("a8")).is_err());
    }
}
