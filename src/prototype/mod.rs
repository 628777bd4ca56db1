//! Ready-made states and conditions for sketching graphs.
//!
//! Useful while a graph's shape is still being worked out, and in tests.

mod condition;
mod state;

pub use condition::{FnCondition, PrototypeCondition};
pub use state::PrototypeState;
