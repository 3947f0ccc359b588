//! Identifier traits for states and events.
//!
//! The machine never inspects what a state or an event *is*. It only needs
//! to compare, hash, clone and name them, which these traits capture.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// A state identifier names one entry of the transition table. Plain
/// `String`s work out of the box; closed sets are usually better expressed
/// as an enum declared with [`state_enum!`](crate::state_enum).
///
/// # Required Traits
///
/// - `Clone`: states are pushed onto the undo and redo stacks
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `DeserializeOwned`: states appear in configuration documents
///
/// # Example
///
/// ```rust
/// use rewind::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for event identifiers.
///
/// Events label the outgoing edges of a state. The same bounds as [`State`]
/// apply since events key each state's transition map.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
