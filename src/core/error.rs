//! Error types for board addressing and the column algebra.
//!
//! Addressing failures (`OutOfBounds`, `MalformedCoordinate`,
//! `UnknownSquare`) are ordinary runtime conditions. `InvariantViolation`
//! means the caller broke the algebra's contract: it is fatal in debug
//! builds and only reported as an error value in release builds.

use std::fmt;

use super::coord::Coordinate;

/// Errors raised by the board, the column algebra and the move layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// File/rank indices outside the grid.
    OutOfBounds { file: i32, rank: i32 },
    /// Coordinate text that is not `<letter><number>`.
    MalformedCoordinate(String),
    /// In-range coordinate with no registered square.
    UnknownSquare(Coordinate),
    /// Piece code missing from the piece vocabulary.
    UnknownPieceId(String),
    /// Operation on a destroyed column, a detached piece used as attached,
    /// a square claimed by two columns, and similar contract breaches.
    InvariantViolation(String),
    /// A move is in flight; input is locked until it finishes.
    InputLocked,
    /// The requested move needs a selected column.
    NothingSelected,
    /// The requested move does not apply to the current board.
    IllegalMove(String),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::OutOfBounds { file, rank } => {
                write!(f, "coordinate (file {file}, rank {rank}) is outside the board")
            }
            StackError::MalformedCoordinate(text) => {
                write!(f, "malformed coordinate {text:?}")
            }
            StackError::UnknownSquare(coord) => write!(f, "no square registered at {coord}"),
            StackError::UnknownPieceId(code) => write!(f, "unknown piece id {code:?}"),
            StackError::InvariantViolation(detail) => {
                write!(f, "column invariant violated: {detail}")
            }
            StackError::InputLocked => write!(f, "input is locked while a move is in progress"),
            StackError::NothingSelected => write!(f, "no column selected"),
            StackError::IllegalMove(detail) => write!(f, "illegal move: {detail}"),
        }
    }
}

impl std::error::Error for StackError {}

/// Report a broken algebra contract.
///
/// Logs at `error` level and panics in debug builds; in release builds the
/// violation is returned to the caller as [`StackError::InvariantViolation`].
#[cold]
#[track_caller]
pub(crate) fn violation(detail: impl Into<String>) -> StackError {
    let detail = detail.into();
    tracing::error!(%detail, "column invariant violated");
    debug_assert!(false, "column invariant violated: {detail}");
    StackError::InvariantViolation(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_bounds() {
        let err = StackError::OutOfBounds { file: 9, rank: -1 };
        let msg = format!("{err}");
        assert!(msg.contains("file 9"), "got: {msg}");
        assert!(msg.contains("rank -1"), "got: {msg}");
    }

    #[test]
    fn test_display_unknown_square() {
        let err = StackError::UnknownSquare(Coordinate::new(2, 3));
        assert_eq!(format!("{err}"), "no square registered at c4");
    }

    #[test]
    fn test_display_square_past_last_file() {
        let err = StackError::UnknownSquare(Coordinate::new(200, 0));
        assert_eq!(format!("{err}"), "no square registered at (200, 0)");
    }

    #[test]
    fn test_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(StackError::InputLocked);
        assert!(err.source().is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invariant violated")]
    fn test_violation_is_fatal_in_debug() {
        let _ = violation("square claimed twice");
    }
}
