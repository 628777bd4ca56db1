//! Capabilities the graph consumes.
//!
//! This module contains the contracts supplied by callers:
//! - States receiving enter/exit callbacks via the `State` trait
//! - Transition predicates via the `Condition` trait
//! - The `Trigger` channel a condition raises to request a re-check
//!
//! The graph never owns the behavior behind these contracts. It holds shared
//! handles, calls into them, and compares them by identity.

mod condition;
mod state;
mod trigger;

pub use condition::Condition;
pub use state::State;
pub use trigger::{ListenerId, Trigger};

pub(crate) use state::{identity, label};
