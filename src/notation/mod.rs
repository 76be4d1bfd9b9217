//! rpgFEN: the text format for board positions.
//!
//! A position reads `boardId|rank/rank/...`. Ranks are listed from the top,
//! squares within a rank from the left; see [`decode`] for the full grammar
//! and cursor rules.
//!
//! ## Key Types
//!
//! - `Layout`: Decoded position, a coordinate to piece-stack description
//! - `PieceSpec`: One piece entry (`code` or `code;notes`)
//! - `NotationError`: Decode, encode and load failures
//!
//! ## Entry Points
//!
//! - [`decode`] / [`encode`]: text to `Layout` and back
//! - [`load`] / [`save`]: text to a populated `GameState` and back

mod decode;
mod encode;
pub mod error;
pub mod layout;
mod load;

pub use decode::{decode, decode_stack};
pub use encode::encode;
pub use error::NotationError;
pub use layout::{Layout, PieceSpec, Placement};
pub use load::{describe, load, save};
