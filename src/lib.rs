//! Waypoint: a minimal finite state machine with undo/redo history
//!
//! A machine is declared as a map of states, each with the events it
//! accepts and the state each event leads to. The machine tracks a
//! current state, validates every move against that table, and keeps a
//! linear history that can be walked with `undo` and `redo`.
//!
//! # Core Concepts
//!
//! - **State / Event**: Opaque string labels
//! - **Transition table**: Immutable `(state, event) -> state` map built from a `MachineConfig`
//! - **History**: Past and future stacks; any new move discards the future
//!
//! # Example
//!
//! ```rust
//! use waypoint::{Event, MachineConfig, State, StateMachine};
//!
//! let config = MachineConfig::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle", "pause": "paused" } },
//!         "paused": { "transitions": { "resume": "running" } }
//!     }
//! }"#)
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger(&Event::from("start")).unwrap();
//! machine.change_state(&State::from("paused")).unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), &State::from("running"));
//!
//! machine.reset();
//! assert_eq!(machine.state(), &State::from("idle"));
//! ```
//!
//! State changes are reported as `tracing` debug events; install a
//! subscriber to see them.

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use config::{MachineConfig, StateConfig};
pub use self::core::{Event, State, TransitionTable, UndoHistory};
pub use error::MachineError;
pub use machine::StateMachine;
