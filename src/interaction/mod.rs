//! Player-facing move layer.
//!
//! ## Key Types
//!
//! - `MoveMaker`: Selection, move requests and their two-phase execution
//! - `MoveDescriptor`: `from-to[-returnTo]` text form of a move
//! - `MoveListener`: Start/end notifications for animations and logs
//!
//! The move maker is the only caller of the column algebra during play. It
//! never leaves the board half-changed: a request only plans the move, and
//! [`MoveMaker::finish`] applies the plan in a single step.

pub mod descriptor;
pub mod listener;
pub mod maker;

pub use descriptor::MoveDescriptor;
pub use listener::{MoveListener, RecordingListener};
pub use maker::{MoveMaker, SplitSelection};
