//! State and event identifiers.
//!
//! Both are opaque string labels. A state is only meaningful relative to
//! a [`TransitionTable`](super::TransitionTable): the set of valid states is
//! exactly the set of states declared there.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named node in the machine's configuration space.
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
///
/// let idle = State::from("idle");
/// assert_eq!(idle.as_str(), "idle");
/// assert_eq!(idle.to_string(), "idle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named trigger used to look up a transition from the current state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(String);

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Event {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Event {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
