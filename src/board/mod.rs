//! Board and squares: the placement authority.
//!
//! ## Key Types
//!
//! - `Square`: One cell, holding at most one resident column
//! - `Board`: Coordinate-indexed squares plus highlight marks
//! - `Highlight`: Colour class of a marked square

pub mod grid;
pub mod square;

pub use grid::{Board, Highlight};
pub use square::Square;
