//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied at all
    #[error("No config provided")]
    Missing,

    /// A builder was finished without naming the initial state
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// The initial state is not a key of the transition table
    #[error("Initial state '{state}' is not defined in the state table")]
    UnknownInitialState { state: String },

    /// A transition points at a state that is not in the table
    #[error("Transition '{event}' from '{from}' targets undefined state '{target}'")]
    UnknownTarget {
        from: String,
        event: String,
        target: String,
    },

    /// The configuration document is not valid JSON for this shape
    #[error("Config parse failed: {0}")]
    Parse(String),

    /// The configuration file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
