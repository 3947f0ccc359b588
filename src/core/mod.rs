//! Core state machine types.
//!
//! This module contains the building blocks the machine is made of:
//! - State and event identifiers via the `State` and `Event` traits
//! - Linear undo/redo tracking via `UndoHistory`

mod history;
mod state;

pub use history::UndoHistory;
pub use state::{Event, State};
