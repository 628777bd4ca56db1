//! Immutable runtime graph.
//!
//! A [`StateGraph`] is baked from a composer and then driven with `enter`,
//! `exit`, and the notifications of the conditions on its links.

mod link;
mod node;
mod snapshot;
mod state_graph;

pub use link::StateGraphLink;
pub use snapshot::{ActivePath, PathSegment};
pub use state_graph::StateGraph;
