//! The finite state machine engine.

use crate::config::{ConfigError, MachineConfig, TransitionTable};
use crate::core::{Event, State, UndoHistory};
use crate::machine::error::TransitionError;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Finite state machine with linear undo/redo.
///
/// The machine owns its transition table; it cannot change after
/// construction. Every successful move pushes the state being left onto the
/// history so it can be undone.
///
/// # Example
///
/// ```rust
/// use rewind::FiniteStateMachine;
///
/// let mut fsm: FiniteStateMachine = FiniteStateMachine::from_json(r#"{
///     "initial": "A",
///     "states": {
///         "A": { "transitions": { "go": "B" } },
///         "B": { "transitions": { "back": "A" } }
///     }
/// }"#).unwrap();
///
/// fsm.trigger("go").unwrap();
/// assert_eq!(fsm.current_state(), "B");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.current_state(), "A");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.current_state(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct FiniteStateMachine<S: State = String, E: Event = String> {
    initial: S,
    states: TransitionTable<S, E>,
    current: S,
    history: UndoHistory<S>,
}

impl<S: State, E: Event> FiniteStateMachine<S, E> {
    /// Create a machine in the configuration's initial state.
    ///
    /// Fails if the initial state or any transition target is not defined
    /// in the table.
    pub fn new(config: MachineConfig<S, E>) -> Result<Self, ConfigError> {
        config.validate()?;
        let MachineConfig { initial, states } = config;
        debug!(
            initial = initial.name(),
            states = states.len(),
            "state machine created"
        );

        Ok(Self {
            current: initial.clone(),
            initial,
            states,
            history: UndoHistory::new(),
        })
    }

    /// Create a machine from a configuration that may be absent.
    pub fn from_config(config: Option<MachineConfig<S, E>>) -> Result<Self, ConfigError> {
        Self::new(config.ok_or(ConfigError::Missing)?)
    }

    /// Parse a JSON configuration and create a machine from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(MachineConfig::from_json(json)?)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine starts in and resets to (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get the transition table (pure)
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.states
    }

    /// Jump directly to `target`, ignoring the transition rules.
    pub fn change_state<Q>(&mut self, target: &Q) -> Result<(), TransitionError>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some((stored, _)) = self.states.get_key_value(target) else {
            return Err(TransitionError::UnknownState {
                state: format!("{target:?}"),
            });
        };

        let target = stored.clone();
        debug!(
            from = self.current.name(),
            to = target.name(),
            "state changed directly"
        );
        self.advance(target);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Fails if the current state has no transition for `event`.
    pub fn trigger<Q>(&mut self, event: &Q) -> Result<(), TransitionError>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let target = self
            .states
            .get(&self.current)
            .and_then(|definition| definition.target(event))
            .cloned()
            .ok_or_else(|| TransitionError::UnknownEvent {
                state: self.current.name().to_string(),
                event: format!("{event:?}"),
            })?;

        debug!(
            from = self.current.name(),
            to = target.name(),
            event = ?event,
            "event triggered transition"
        );
        self.advance(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// The state being left is recorded for undo, but unlike
    /// [`change_state`](Self::change_state) and [`trigger`](Self::trigger)
    /// the redo stack is kept.
    pub fn reset(&mut self) {
        let left = std::mem::replace(&mut self.current, self.initial.clone());
        debug!(from = left.name(), to = self.current.name(), "state reset");
        self.history.record_keep_redo(left);
    }

    /// Every configured state, in configuration order.
    pub fn states(&self) -> Vec<S> {
        self.states.state_ids().cloned().collect()
    }

    /// States that have a transition for `event`, in configuration order.
    pub fn states_with_event<Q>(&self, event: &Q) -> Vec<S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(state, _)| state.clone())
            .collect()
    }

    /// Events the current state handles, in no particular order.
    pub fn available_events(&self) -> Vec<E> {
        self.states
            .get(&self.current)
            .map(|definition| definition.events().cloned().collect())
            .unwrap_or_default()
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(self.current.clone()) {
            Some(previous) => {
                trace!(from = self.current.name(), to = previous.name(), "undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward(self.current.clone()) {
            Some(next) => {
                trace!(from = self.current.name(), to = next.name(), "redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Forget all undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        trace!(
            undo = self.history.past().len(),
            redo = self.history.undone().len(),
            "history cleared"
        );
        self.history.clear();
    }

    /// States that can be undone back to, most recent last (pure)
    pub fn history(&self) -> &[S] {
        self.history.past()
    }

    /// States that can be redone forward to, most recent last (pure)
    pub fn redo_stack(&self) -> &[S] {
        self.history.undone()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn advance(&mut self, target: S) {
        let left = std::mem::replace(&mut self.current, target);
        self.history.record(left);
    }
}
