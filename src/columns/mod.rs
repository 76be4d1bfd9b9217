//! Columns: ordered piece stacks and their algebra.
//!
//! ## Key Types
//!
//! - `Column`: Read-only view of a stack, commander first
//! - `ColumnEvent`: Lifecycle notifications queued on the `GameState`
//! - `ColumnIndex`: Nearest-column queries, rebuilt on demand
//!
//! The stack operations themselves (`add_on_top`, `add_to_bottom`, `take`,
//! `split`, `release_top`, ...) are methods on
//! [`GameState`](crate::core::GameState), defined in `algebra`.

mod algebra;
pub mod column;
pub mod event;
pub mod index;

pub use column::Column;
pub use event::ColumnEvent;
pub use index::{ColumnIndex, IndexedColumn};
