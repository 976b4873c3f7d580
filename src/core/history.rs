//! Linear undo/redo history.
//!
//! History is a pair of stacks: states that were left (past) and states
//! that were undone (future). Recording a new move discards the future,
//! so there is only ever one redo branch.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Past and future state stacks, oldest entry first.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{State, UndoHistory};
///
/// let mut history = UndoHistory::new();
/// history.record(State::from("idle"));
///
/// // Undo from "running" lands back on "idle".
/// let back = history.undo(State::from("running"));
/// assert_eq!(back, Some(State::from("idle")));
///
/// // Redo from "idle" returns to "running".
/// let forward = history.redo(State::from("idle"));
/// assert_eq!(forward, Some(State::from("running")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoHistory {
    past: Vec<State>,
    future: Vec<State>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `previous` was left by a new move.
    ///
    /// Pushes `previous` onto the past stack and drops every undone state.
    pub fn record(&mut self, previous: State) {
        self.past.push(previous);
        self.future.clear();
    }

    /// Step back from `current`.
    ///
    /// Returns the state to move to, or `None` (leaving the history
    /// untouched) when there is nothing to undo.
    pub fn undo(&mut self, current: State) -> Option<State> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward from `current`.
    ///
    /// Returns the state to move to, or `None` (leaving the history
    /// untouched) when there is nothing to redo.
    pub fn redo(&mut self, current: State) -> Option<State> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// States that can be undone to, oldest first.
    pub fn past(&self) -> &[State] {
        &self.past
    }

    /// States that can be redone to, oldest first.
    pub fn future(&self) -> &[State] {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> State {
        State::from(name)
    }

    #[test]
    fn new_history_is_empty() {
        let history = UndoHistory::new();
        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_pushes_past_in_order() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.record(s("b"));
        assert_eq!(history.past(), [s("a"), s("b")]);
    }

    #[test]
    fn undo_on_empty_history_is_none() {
        let mut history = UndoHistory::new();
        assert_eq!(history.undo(s("a")), None);
        assert!(history.future().is_empty());
    }

    #[test]
    fn redo_on_empty_future_is_none() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        assert_eq!(history.redo(s("b")), None);
        assert_eq!(history.past(), [s("a")]);
    }

    #[test]
    fn undo_moves_current_to_future() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.record(s("b"));

        assert_eq!(history.undo(s("c")), Some(s("b")));
        assert_eq!(history.past(), [s("a")]);
        assert_eq!(history.future(), [s("c")]);

        assert_eq!(history.undo(s("b")), Some(s("a")));
        assert_eq!(history.future(), [s("c"), s("b")]);
    }

    #[test]
    fn undo_then_redo_restores_stacks() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.record(s("b"));
        let before = history.clone();

        let back = history.undo(s("c")).unwrap();
        assert_eq!(history.redo(back), Some(s("c")));
        assert_eq!(history, before);
    }

    #[test]
    fn record_discards_redo_branch() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.undo(s("b"));
        assert!(history.can_redo());

        history.record(s("a"));
        assert!(!history.can_redo());
        assert_eq!(history.past(), [s("a")]);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.record(s("b"));
        history.undo(s("c"));

        history.clear();
        assert_eq!(history, UndoHistory::new());
    }
}
