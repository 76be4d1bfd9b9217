//! Piece vocabulary lookup.
//!
//! The `PieceKindRegistry` maps notation codes to [`PieceKind`]s. The
//! notation codec consults it to tell an unknown piece id from a valid one,
//! and the spawner reads team and capturability from it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::kind::{PieceKind, Team};

/// Registry of piece kinds keyed by code.
///
/// ## Example
///
/// ```
/// use column_chess::pieces::{PieceKind, PieceKindRegistry, Team};
///
/// let mut registry = PieceKindRegistry::new();
/// registry.register(PieceKind::new("k", "knight", Team::Green));
///
/// assert_eq!(registry.get("k").unwrap().name, "knight");
/// assert!(registry.get("q").is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PieceKindRegistry {
    kinds: FxHashMap<String, PieceKind>,
}

impl PieceKindRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The arena's ten built-in kinds.
    ///
    /// | code | kind | team |
    /// |---|---|---|
    /// | `g` `c` `y` `r` | soldiers | green, cyan, yellow, red |
    /// | `G` | friendly officer | green |
    /// | `R` | hostile officer | red |
    /// | `B` | building (not capturable) | neutral |
    /// | `h` `s` `p` | chest, sword, potion | neutral |
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(PieceKind::new("g", "green soldier", Team::Green));
        registry.register(PieceKind::new("c", "cyan soldier", Team::Cyan));
        registry.register(PieceKind::new("y", "yellow soldier", Team::Yellow));
        registry.register(PieceKind::new("r", "red soldier", Team::Red));
        registry.register(PieceKind::new("G", "green officer", Team::Green));
        registry.register(PieceKind::new("R", "red officer", Team::Red));
        registry.register(PieceKind::new("B", "building", Team::Neutral).fixed());
        registry.register(PieceKind::new("h", "chest", Team::Neutral));
        registry.register(PieceKind::new("s", "sword", Team::Neutral));
        registry.register(PieceKind::new("p", "potion", Team::Neutral));
        registry
    }

    /// Register a kind.
    ///
    /// Panics if the code is already registered.
    pub fn register(&mut self, kind: PieceKind) {
        if self.kinds.contains_key(&kind.code) {
            panic!("Piece code {:?} already registered", kind.code);
        }
        self.kinds.insert(kind.code.clone(), kind);
    }

    /// Look up a kind by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&PieceKind> {
        self.kinds.get(code)
    }

    /// Check if a code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.kinds.contains_key(code)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over all kinds.
    pub fn iter(&self) -> impl Iterator<Item = &PieceKind> {
        self.kinds.values()
    }

    /// Kinds belonging to a team.
    pub fn find_by_team(&self, team: Team) -> impl Iterator<Item = &PieceKind> {
        self.kinds.values().filter(move |k| k.team == team)
    }
}
