//! Stategraph: a hierarchical finite state machine graph
//!
//! A state graph is a tree of nodes. Each node may carry a state and owns an
//! ordered set of children plus condition-guarded links between them. While a
//! node is entered exactly one of its children is active, so the graph always
//! has a single active path from the root to a leaf.
//!
//! # Core Concepts
//!
//! - **State**: enter/exit behavior attached to a node via the `State` trait
//! - **Condition**: a predicate guarding a link, with a `Trigger` it fires to
//!   request a re-check
//! - **Composer**: the mutable description that is validated and baked
//! - **StateGraph**: the immutable runtime graph driven by `enter`/`exit`
//!
//! Everything runs synchronously on the calling thread. A condition's trigger
//! runs the transition before `fire` returns.
//!
//! # Example
//!
//! ```rust
//! use stategraph::{PrototypeCondition, PrototypeState, StateGraphComposer};
//! use std::rc::Rc;
//!
//! let root = StateGraphComposer::empty();
//! let calm = StateGraphComposer::with_state(Rc::new(PrototypeState::named("Calm")));
//! let alert = StateGraphComposer::with_state(Rc::new(PrototypeState::named("Alert")));
//! root.add_node(&calm).unwrap();
//! root.add_node(&alert).unwrap();
//!
//! let noise = Rc::new(PrototypeCondition::named("noise"));
//! root.add_link(&calm, &alert, noise.clone()).unwrap();
//!
//! let graph = root.build_validated().unwrap();
//! graph.enter();
//! noise.trigger();
//! assert_eq!(graph.active_index(), Some(1));
//! graph.exit();
//! ```

pub mod composer;
pub mod core;
pub mod graph;
pub mod prototype;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use composer::{ComposerError, StateGraphComposer};
pub use self::core::{Condition, State, Trigger};
pub use graph::{ActivePath, StateGraph};
pub use prototype::{FnCondition, PrototypeCondition, PrototypeState};
