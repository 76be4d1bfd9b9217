//! Piece vocabulary, piece instances and spawning.
//!
//! ## Key Types
//!
//! - `PieceKind`: Static properties behind a notation code (team, capturable)
//! - `PieceKindRegistry`: Code to kind lookup
//! - `Piece`: A spawned piece, linked to its column
//! - `PieceSpawner`: Builds columns from decoded piece specs

pub mod kind;
pub mod piece;
pub mod registry;
pub mod spawner;

pub use kind::{PieceKind, Team};
pub use piece::Piece;
pub use registry::PieceKindRegistry;
pub use spawner::{ColumnSpawner, PieceSpawner, PieceVocabulary};
