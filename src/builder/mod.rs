//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for declaring
//! machines in code instead of writing a [`MachineConfig`](crate::MachineConfig)
//! by hand.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
