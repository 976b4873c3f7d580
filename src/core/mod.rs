//! Core state machine types.
//!
//! This module contains the data the machine is built from:
//! - `State` and `Event` labels
//! - The immutable `TransitionTable`
//! - The linear `UndoHistory`
//!
//! Nothing here performs I/O or logging; the `machine` module composes
//! these pieces and reports what happened.

mod history;
mod state;
mod table;

pub use history::UndoHistory;
pub use state::{Event, State};
pub use table::TransitionTable;
