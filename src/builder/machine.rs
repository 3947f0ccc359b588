//! Builder for constructing state machines.

use crate::config::{ConfigError, MachineConfig, TransitionTable};
use crate::core::{Event, State};
use crate::machine::FiniteStateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// States are listed in the order they are first mentioned, either by
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
pub struct MachineBuilder<S: State = String, E: Event = String> {
    initial: Option<S>,
    states: TransitionTable<S, E>,
}

impl<S: State, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: TransitionTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state, with no transitions unless added later.
    pub fn state(mut self, state: S) -> Self {
        self.states.definition_mut(state);
        self
    }

    /// Add the transition `from --event--> to`.
    ///
    /// `from` is declared if it was not already. `to` must be declared
    /// somewhere before [`build`](Self::build).
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        self.states.definition_mut(from).add_transition(event, to);
        self
    }

    /// Finish into a configuration without creating a machine.
    pub fn into_config(self) -> Result<MachineConfig<S, E>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        Ok(MachineConfig::new(initial, self.states))
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the table is inconsistent.
    pub fn build(self) -> Result<FiniteStateMachine<S, E>, ConfigError> {
        FiniteStateMachine::new(self.into_config()?)
    }
}

impl<S: State, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
