//! Builder for constructing state machines.

use crate::config::{MachineConfig, StateConfig};
use crate::core::{Event, State};
use crate::error::MachineError;
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::StateMachineBuilder;
/// use waypoint::{Event, State};
///
/// let mut machine = StateMachineBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .transition("review", "reject", "draft")
///     .state("published")
///     .build()
///     .unwrap();
///
/// machine.trigger(&Event::from("submit")).unwrap();
/// assert_eq!(machine.state(), &State::from("review"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateMachineBuilder {
    initial: Option<State>,
    states: Vec<(State, StateConfig)>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<State>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again is a no-op.
    pub fn state(mut self, state: impl Into<State>) -> Self {
        self.declare(state.into());
        self
    }

    /// Add a transition, declaring `from` if needed.
    ///
    /// A second transition on the same event from the same state replaces
    /// the first.
    pub fn transition(
        mut self,
        from: impl Into<State>,
        event: impl Into<Event>,
        to: impl Into<State>,
    ) -> Self {
        let (event, to) = (event.into(), to.into());
        let transitions = &mut self.declare(from.into()).transitions;
        match transitions.iter_mut().find(|(e, _)| *e == event) {
            Some(existing) => existing.1 = to,
            None => transitions.push((event, to)),
        }
        self
    }

    /// Produce the configuration without building a machine.
    pub fn config(self) -> Result<MachineConfig, MachineError> {
        let initial = self.initial.ok_or_else(|| MachineError::InvalidConfig {
            reason: "initial state not specified, call .initial(state) before .build()"
                .to_string(),
        })?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        self.config().map(StateMachine::new)
    }

    fn declare(&mut self, state: State) -> &mut StateConfig {
        let index = match self.states.iter().position(|(s, _)| *s == state) {
            Some(index) => index,
            None => {
                self.states.push((state, StateConfig::default()));
                self.states.len() - 1
            }
        };
        &mut self.states[index].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_initial_state() {
        let result = StateMachineBuilder::new()
            .transition("a", "go", "b")
            .build();

        assert!(matches!(result, Err(MachineError::InvalidConfig { .. })));
    }

    #[test]
    fn builder_without_states_builds_empty_machine() {
        let machine = StateMachineBuilder::new().initial("idle").build().unwrap();

        assert_eq!(machine.state(), &State::from("idle"));
        assert!(machine.states(None).is_empty());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = StateMachineBuilder::new()
            .initial("idle")
            .transition("idle", "start", "running")
            .transition("running", "stop", "idle")
            .build()
            .unwrap();

        machine.trigger(&Event::from("start")).unwrap();
        assert_eq!(machine.state(), &State::from("running"));
        machine.trigger(&Event::from("stop")).unwrap();
        assert_eq!(machine.state(), &State::from("idle"));
    }

    #[test]
    fn declaration_order_follows_first_mention() {
        let config = StateMachineBuilder::new()
            .initial("b")
            .state("b")
            .transition("a", "go", "b")
            .transition("b", "back", "a")
            .state("a")
            .config()
            .unwrap();

        let names: Vec<_> = config.states.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn repeated_event_replaces_target() {
        let config = StateMachineBuilder::new()
            .initial("a")
            .transition("a", "go", "b")
            .transition("a", "go", "c")
            .config()
            .unwrap();

        assert_eq!(
            config.states[0].1.transitions,
            vec![(Event::from("go"), State::from("c"))]
        );
    }
}
