//! Piece kinds - the static vocabulary behind notation codes.
//!
//! A `PieceKind` holds the immutable properties shared by every piece
//! spawned from the same code: its team and whether it can be carried off
//! as a prisoner. Runtime data (column membership, notes) lives on
//! [`Piece`](super::Piece).

use serde::{Deserialize, Serialize};

/// Side a piece plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Green,
    Cyan,
    Yellow,
    Red,
    /// Buildings, chests and loose items.
    Neutral,
}

/// Static description of one piece code.
///
/// ```
/// use column_chess::pieces::{PieceKind, Team};
///
/// let tower = PieceKind::new("B", "building", Team::Neutral).fixed();
/// assert!(!tower.capturable);
/// assert_eq!(tower.code, "B");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceKind {
    /// Notation code, one or more ASCII letters (`g`, `G`, ...).
    pub code: String,

    /// Display name.
    pub name: String,

    /// Owning side.
    pub team: Team,

    /// Can the piece be taken along as a prisoner during splits and
    /// captures?
    pub capturable: bool,
}

impl PieceKind {
    /// Create a capturable kind.
    ///
    /// Panics if `code` is not a non-empty run of ASCII letters.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, team: Team) -> Self {
        let code = code.into();
        assert!(
            is_valid_code(&code),
            "Piece code {code:?} must be ASCII letters"
        );

        Self {
            code,
            name: name.into(),
            team,
            capturable: true,
        }
    }

    /// Mark the kind as not capturable (builder pattern).
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.capturable = false;
        self
    }
}

/// Check that a code is usable in rpgFEN: non-empty ASCII letters.
#[must_use]
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_capturable() {
        let kind = PieceKind::new("g", "green soldier", Team::Green);
        assert!(kind.capturable);
        assert_eq!(kind.team, Team::Green);
    }

    #[test]
    fn test_valid_codes() {
        assert!(is_valid_code("g"));
        assert!(is_valid_code("Gx"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("g1"));
        assert!(!is_valid_code("g;"));
    }

    #[test]
    #[should_panic(expected = "ASCII letters")]
    fn test_bad_code_panics() {
        let _ = PieceKind::new("3", "three", Team::Neutral);
    }
}
