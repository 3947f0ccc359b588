//! Errors raised by state machine operations.

use thiserror::Error;

/// Errors that can occur when moving the machine between states.
///
/// A failed operation never changes the machine: the current state and both
/// history stacks are exactly as they were before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("No such state: {state}")]
    UnknownState { state: String },

    #[error("No such event: {event} is not handled in state '{state}'")]
    UnknownEvent { state: String, event: String },
}
