//! Notation errors.
//!
//! Decoding stops at the first bad token; the error names the rank group
//! (`segment`) and the token so the author can find it.

use std::fmt;

use crate::core::{Coordinate, StackError};

/// Errors raised while decoding, encoding or loading rpgFEN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotationError {
    /// No `|` between the board id and the rank list.
    MissingBoardSeparator,
    /// A token that is neither an integer nor a well-formed piece spec.
    UnrecognizedToken { segment: String, token: String },
    /// A well-formed piece code that is not in the vocabulary.
    UnknownPieceId { segment: String, token: String },
    /// A piece described outside the grid.
    OutOfBounds { segment: String, file: i64, rank: i64 },
    /// Text that cannot be written without breaking the grammar.
    ReservedCharacter { field: &'static str, text: String },
    /// A described square already holds a column.
    SquareOccupied(Coordinate),
    /// The board or the spawner rejected the position.
    Stack(StackError),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::MissingBoardSeparator => {
                write!(f, "position is missing the '|' after the board id")
            }
            NotationError::UnrecognizedToken { segment, token } => {
                write!(f, "unrecognized token {token:?} in rank group {segment:?}")
            }
            NotationError::UnknownPieceId { segment, token } => {
                write!(f, "unknown piece id {token:?} in rank group {segment:?}")
            }
            NotationError::OutOfBounds {
                segment,
                file,
                rank,
            } => write!(
                f,
                "rank group {segment:?} places a piece outside the board (file {file}, rank {rank})"
            ),
            NotationError::ReservedCharacter { field, text } => {
                write!(f, "{field} {text:?} contains a reserved character")
            }
            NotationError::SquareOccupied(at) => write!(f, "square {at} is already occupied"),
            NotationError::Stack(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::Stack(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StackError> for NotationError {
    fn from(e: StackError) -> Self {
        NotationError::Stack(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_segment_and_token() {
        let err = NotationError::UnrecognizedToken {
            segment: "g,*,r".into(),
            token: "*".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("\"*\""), "got: {msg}");
        assert!(msg.contains("g,*,r"), "got: {msg}");
    }

    #[test]
    fn test_stack_error_source() {
        let err: NotationError = StackError::InputLocked.into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
