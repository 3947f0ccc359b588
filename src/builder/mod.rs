//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and declaration macros for creating
//! state machines in code instead of from a configuration document.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
