//! Machine configuration.
//!
//! A configuration names the initial state and the full transition table:
//!
//! ```json
//! {
//!   "initial": "Locked",
//!   "states": {
//!     "Locked":   { "transitions": { "coin": "Unlocked" } },
//!     "Unlocked": { "transitions": { "push": "Locked" } }
//!   }
//! }
//! ```

use crate::core::{Event, State};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod error;
mod table;

pub use error::ConfigError;
pub use table::{StateDefinition, TransitionTable};

/// Initial state plus transition table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State = String, E: Event = String> {
    /// State the machine starts in and returns to on reset
    pub initial: S,

    /// Every state the machine may occupy, with its outgoing transitions
    pub states: TransitionTable<S, E>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    pub fn new(initial: S, states: TransitionTable<S, E>) -> Self {
        Self { initial, states }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// A document consisting of `null` is treated as an absent configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Option<Self> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.ok_or(ConfigError::Missing)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded machine config");
        Self::from_json(&json)
    }

    /// Check that every state the configuration refers to is defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.states.contains(&self.initial) {
            return Err(ConfigError::UnknownInitialState {
                state: self.initial.name().to_string(),
            });
        }

        for (from, definition) in self.states.iter() {
            for (event, target) in definition.iter() {
                if !self.states.contains(target) {
                    return Err(ConfigError::UnknownTarget {
                        from: from.name().to_string(),
                        event: event.name().to_string(),
                        target: target.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURNSTILE: &str = r#"{
        "initial": "Locked",
        "states": {
            "Locked": { "transitions": { "coin": "Unlocked" } },
            "Unlocked": { "transitions": { "push": "Locked" } }
        }
    }"#;

    #[test]
    fn parses_valid_config() {
        let config: MachineConfig = MachineConfig::from_json(TURNSTILE).unwrap();

        assert_eq!(config.initial, "Locked");
        assert_eq!(config.states.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn null_document_is_missing_config() {
        let result = MachineConfig::<String, String>::from_json("null");
        assert!(matches!(result, Err(ConfigError::Missing)));
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let result = MachineConfig::<String, String>::from_json(r#"{ "states": {} }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = MachineConfig::<String, String>::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn duplicate_state_surfaces_as_parse_error() {
        let json = r#"{ "initial": "A", "states": { "A": {}, "A": {} } }"#;
        let result = MachineConfig::<String, String>::from_json(json);

        match result {
            Err(ConfigError::Parse(message)) => assert!(message.contains("'A'")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_unknown_initial_state() {
        let config: MachineConfig =
            MachineConfig::from_json(r#"{ "initial": "Nowhere", "states": { "A": {} } }"#)
                .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownInitialState { ref state } if state == "Nowhere"
        ));
    }

    #[test]
    fn validate_rejects_dangling_target() {
        let json = r#"{
            "initial": "A",
            "states": { "A": { "transitions": { "go": "B" } } }
        }"#;
        let config: MachineConfig = MachineConfig::from_json(json).unwrap();

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Transition 'go' from 'A' targets undefined state 'B'"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let config: MachineConfig = MachineConfig::from_json(TURNSTILE).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let reparsed: MachineConfig = MachineConfig::from_json(&json).unwrap();

        assert_eq!(config, reparsed);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = MachineConfig::<String, String>::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
