//! Machine error types.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors raised by state machine construction and transitions.
///
/// Every failing operation leaves the machine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// No usable configuration was supplied at construction.
    #[error("invalid machine configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A direct state change named a state that is not declared.
    #[error("unknown state: '{state}'")]
    UnknownState { state: State },

    /// The current state has no transition for the triggered event.
    #[error("no transition for event '{event}' in state '{state}'")]
    NoSuchTransition { state: State, event: Event },
}

impl MachineError {
    pub(crate) fn missing_config() -> Self {
        MachineError::InvalidConfig {
            reason: "no configuration supplied".to_string(),
        }
    }

    /// Returns a stable error code for the error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            MachineError::InvalidConfig { .. } => "INVALID_CONFIG",
            MachineError::UnknownState { .. } => "UNKNOWN_STATE",
            MachineError::NoSuchTransition { .. } => "NO_SUCH_TRANSITION",
        }
    }
}

impl From<serde_json::Error> for MachineError {
    fn from(e: serde_json::Error) -> Self {
        MachineError::InvalidConfig {
            reason: e.to_string(),
        }
    }
}
