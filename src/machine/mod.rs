//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **Trigger**: follow the transition the current state defines for an event
//! - **Change state**: jump directly to any configured state
//! - **Undo/Redo**: walk back and forth along the linear history of moves
//!
//! Every operation is synchronous and either fully succeeds or leaves the
//! machine untouched.

mod error;
mod fsm;

pub use error::TransitionError;
pub use fsm::FiniteStateMachine;
