//! Core types: entity ids, coordinates, configuration, errors and state.
//!
//! Everything here is independent of the piece vocabulary and of the
//! notation format; those build on top of this module.

pub mod config;
pub mod coord;
pub mod entity;
pub mod error;
pub mod state;

pub use config::BoardConfig;
pub use coord::Coordinate;
pub use entity::{ColumnId, PieceId};
pub use error::StackError;
pub use state::GameState;
