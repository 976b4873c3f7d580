//! Immutable transition table.

use super::state::{Event, State};
use crate::config::MachineConfig;
use std::collections::HashMap;

/// Map from (state, event) pairs to destination states.
///
/// Built once from a [`MachineConfig`] and never modified. The declared
/// states are exactly the table's keys; listing them follows declaration
/// order.
///
/// # Example
///
/// ```rust
/// use waypoint::config::MachineConfig;
/// use waypoint::core::{Event, State, TransitionTable};
///
/// let config = MachineConfig::new("red")
///     .with_state("red", [("next", "green")])
///     .with_state("green", [("next", "yellow")])
///     .with_state("yellow", [("next", "red")]);
/// let table = TransitionTable::from_config(&config);
///
/// assert_eq!(
///     table.target(&State::from("green"), &Event::from("next")),
///     Some(&State::from("yellow"))
/// );
/// assert!(table.target(&State::from("green"), &Event::from("stop")).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionTable {
    order: Vec<State>,
    paths: HashMap<State, StatePaths>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct StatePaths {
    events: Vec<Event>,
    targets: HashMap<Event, State>,
}

impl TransitionTable {
    /// Copy every declared state's transitions out of a configuration.
    pub fn from_config(config: &MachineConfig) -> Self {
        let mut table = Self::default();
        for (state, state_config) in &config.states {
            if !table.paths.contains_key(state) {
                table.order.push(state.clone());
            }
            // A repeated declaration replaces the earlier one.
            let paths = table.paths.entry(state.clone()).or_default();
            *paths = StatePaths::default();
            for (event, target) in &state_config.transitions {
                if paths.targets.insert(event.clone(), target.clone()).is_none() {
                    paths.events.push(event.clone());
                }
            }
        }
        table
    }

    /// Whether `state` is a declared state.
    pub fn contains_state(&self, state: &State) -> bool {
        self.paths.contains_key(state)
    }

    /// Destination of `event` from `state`, if such a transition exists.
    pub fn target(&self, state: &State, event: &Event) -> Option<&State> {
        self.paths.get(state)?.targets.get(event)
    }

    /// All declared states in declaration order.
    pub fn states(&self) -> &[State] {
        &self.order
    }

    /// Declared states with an outgoing transition on `event`, in
    /// declaration order.
    pub fn states_with_event(&self, event: &Event) -> Vec<State> {
        self.order
            .iter()
            .filter(|state| self.target(state, event).is_some())
            .cloned()
            .collect()
    }

    /// Events leaving `state`, in declaration order.
    ///
    /// Empty for undeclared states and for states without transitions.
    pub fn events(&self, state: &State) -> &[Event] {
        self.paths
            .get(state)
            .map(|paths| paths.events.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
