//! State machine with event-driven transitions and undo/redo history.

use crate::config::MachineConfig;
use crate::core::{Event, State, TransitionTable, UndoHistory};
use crate::error::MachineError;

/// Finite state machine tracking a current state over a fixed
/// transition table.
///
/// Successful `trigger` and `change_state` calls are recorded in a linear
/// history that `undo` and `redo` walk. `reset` returns to the initial
/// state without touching that history.
///
/// The machine owns all of its data and has no internal locking; callers
/// sharing one across threads must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use waypoint::{Event, MachineConfig, MachineError, State, StateMachine};
///
/// let config = MachineConfig::new("idle")
///     .with_state("idle", [("start", "running")])
///     .with_state("running", [("stop", "idle"), ("pause", "paused")])
///     .with_state("paused", [("resume", "running")]);
/// let mut machine = StateMachine::new(config);
///
/// machine.trigger(&Event::from("start")).unwrap();
/// machine.trigger(&Event::from("pause")).unwrap();
/// assert_eq!(machine.state(), &State::from("paused"));
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), &State::from("running"));
///
/// assert_eq!(machine.states(Some(&Event::from("resume"))), vec![State::from("paused")]);
///
/// let err = machine.trigger(&Event::from("nonexistent")).unwrap_err();
/// assert!(matches!(err, MachineError::NoSuchTransition { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct StateMachine {
    table: TransitionTable,
    initial: State,
    current: State,
    history: UndoHistory,
}

impl StateMachine {
    /// Build a machine from a configuration.
    ///
    /// The initial state is not checked against the declared states.
    pub fn new(config: MachineConfig) -> Self {
        Self {
            table: TransitionTable::from_config(&config),
            current: config.initial.clone(),
            initial: config.initial,
            history: UndoHistory::new(),
        }
    }

    /// Build a machine from a JSON configuration.
    ///
    /// Fails with `InvalidConfig` when the input is empty, `null`, or not a
    /// valid configuration.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        MachineConfig::from_json(json).map(Self::new)
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.current
    }

    /// State the machine started in.
    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Jump directly to `target`, ignoring transition rules.
    ///
    /// Only checks that `target` is a declared state. On success the
    /// previous state is recorded and the redo branch is discarded.
    pub fn change_state(&mut self, target: &State) -> Result<(), MachineError> {
        if !self.table.contains_state(target) {
            return Err(MachineError::UnknownState {
                state: target.clone(),
            });
        }

        let from = std::mem::replace(&mut self.current, target.clone());
        tracing::debug!(from = %from, to = %self.current, "state changed");
        self.history.record(from);
        Ok(())
    }

    /// Follow the transition for `event` out of the current state.
    ///
    /// On success the previous state is recorded and the redo branch is
    /// discarded.
    pub fn trigger(&mut self, event: &Event) -> Result<(), MachineError> {
        let target = self
            .table
            .target(&self.current, event)
            .cloned()
            .ok_or_else(|| MachineError::NoSuchTransition {
                state: self.current.clone(),
                event: event.clone(),
            })?;

        let from = std::mem::replace(&mut self.current, target);
        tracing::debug!(from = %from, to = %self.current, event = %event, "transition triggered");
        self.history.record(from);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// The reset itself is not recorded and existing history stays
    /// navigable.
    pub fn reset(&mut self) {
        tracing::debug!(from = %self.current, to = %self.initial, "machine reset");
        self.current = self.initial.clone();
    }

    /// Declared states, in declaration order.
    ///
    /// With an event, only the states that have a transition on it.
    pub fn states(&self, event: Option<&Event>) -> Vec<State> {
        match event {
            Some(event) => self.table.states_with_event(event),
            None => self.table.states().to_vec(),
        }
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` and changes nothing when there is no history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.current.clone()) {
            Some(previous) => {
                tracing::debug!(from = %self.current, to = %previous, "undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` and changes nothing when nothing has been undone.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.current.clone()) {
            Some(next) => {
                tracing::debug!(from = %self.current, to = %next, "redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Forget all history. The current state is unaffected.
    pub fn clear_history(&mut self) {
        tracing::debug!(
            past = self.history.past().len(),
            future = self.history.future().len(),
            "history cleared"
        );
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl From<MachineConfig> for StateMachine {
    fn from(config: MachineConfig) -> Self {
        Self::new(config)
    }
}

impl TryFrom<Option<MachineConfig>> for StateMachine {
    type Error = MachineError;

    /// Fails with `InvalidConfig` when no configuration is supplied.
    fn try_from(config: Option<MachineConfig>) -> Result<Self, Self::Error> {
        config
            .map(Self::new)
            .ok_or_else(MachineError::missing_config)
    }
}
