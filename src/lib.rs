//! Rewind: a finite state machine with undo and redo
//!
//! A machine tracks one current state out of a fixed table. Named events move
//! it along the edges the table defines, and direct jumps can move it
//! anywhere in the table. Every move is recorded, so the machine can walk back
//! and forth along its history like an editor's undo stack.
//!
//! # Core Concepts
//!
//! - **State / Event**: identifiers via the `State` and `Event` traits
//! - **Transition table**: per-state map from event to target state
//! - **History**: a linear undo stack plus a redo stack invalidated by new moves
//!
//! # Example
//!
//! ```rust
//! use rewind::{FiniteStateMachine, MachineBuilder};
//!
//! let mut fsm: FiniteStateMachine = MachineBuilder::new()
//!     .initial("Locked".to_string())
//!     .transition("Locked".to_string(), "coin".to_string(), "Unlocked".to_string())
//!     .transition("Unlocked".to_string(), "push".to_string(), "Locked".to_string())
//!     .build()
//!     .unwrap();
//!
//! fsm.trigger("coin").unwrap();
//! assert_eq!(fsm.current_state(), "Unlocked");
//! assert!(fsm.trigger("coin").is_err());
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.current_state(), "Locked");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use config::{ConfigError, MachineConfig, StateDefinition, TransitionTable};
pub use crate::core::{Event, State, UndoHistory};
pub use machine::{FiniteStateMachine, TransitionError};
