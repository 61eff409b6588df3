//! Canonical scene order plus the drag/drop reorder protocol that mutates it.

pub mod drag;
pub mod reorder;
pub mod store;

pub use drag::{insertion_index, transition, DragEffect, DragState, Transition};
pub use reorder::{apply_move, plan_move, reorder};
pub use store::SequenceStore;
