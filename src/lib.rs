//! # column-chess
//!
//! Board model for a stacking chess variant: pieces form ordered columns
//! that merge, split and capture each other on a coordinate grid, and whole
//! positions round-trip through the compact rpgFEN text format.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `GameState` owns every piece and column in id-keyed
//!    arenas. Squares, pieces and columns refer to each other by id, so
//!    there are no reference cycles to keep alive.
//!
//! 2. **Atomic Transitions**: every stack operation runs to completion
//!    before it returns. Animation and input locking live outside the core,
//!    in the interaction layer.
//!
//! 3. **Fail Fast on Contract Breaches**: using a destroyed column or
//!    claiming an occupied square is a caller bug. It panics in debug
//!    builds and surfaces as `StackError::InvariantViolation` in release.
//!
//! ## Modules
//!
//! - `core`: Ids, coordinates, board configuration, errors and `GameState`
//! - `board`: Squares and highlight marks
//! - `pieces`: Piece vocabulary, piece instances and the spawner
//! - `columns`: Column views, the stack algebra and the column index
//! - `notation`: rpgFEN decoding, encoding, loading and saving
//! - `interaction`: Selection and two-phase move execution

pub mod board;
pub mod columns;
pub mod core;
pub mod interaction;
pub mod notation;
pub mod pieces;

// Re-export commonly used types
pub use crate::core::{BoardConfig, ColumnId, Coordinate, GameState, PieceId, StackError};

pub use crate::board::{Board, Highlight, Square};

pub use crate::pieces::{
    ColumnSpawner, Piece, PieceKind, PieceKindRegistry, PieceSpawner, PieceVocabulary, Team,
};

pub use crate::columns::{Column, ColumnEvent, ColumnIndex, IndexedColumn};

pub use crate::notation::{
    decode, decode_stack, describe, encode, load, save, Layout, NotationError, PieceSpec,
    Placement,
};

pub use crate::interaction::{
    MoveDescriptor, MoveListener, MoveMaker, RecordingListener, SplitSelection,
};
