//! Mutable description of a state graph, validated and baked before use.
//!
//! A composer node holds an optional state, its child descriptions, and the
//! links between those children. Compose a tree with
//! [`add_node`](StateGraphComposer::add_node) and
//! [`add_link`](StateGraphComposer::add_link), check it with
//! [`validate`](StateGraphComposer::validate), then
//! [`build`](StateGraphComposer::build) the runtime [`StateGraph`].
//!
//! # Example
//!
//! ```rust
//! use stategraph::composer::StateGraphComposer;
//! use stategraph::prototype::{PrototypeCondition, PrototypeState};
//! use std::rc::Rc;
//!
//! let root = StateGraphComposer::empty();
//! let patrol = StateGraphComposer::with_state(Rc::new(PrototypeState::named("Patrol")));
//! let chase = StateGraphComposer::with_state(Rc::new(PrototypeState::named("Chase")));
//! root.add_node(&patrol).unwrap();
//! root.add_node(&chase).unwrap();
//! root.add_link(&patrol, &chase, Rc::new(PrototypeCondition::named("spotted"))).unwrap();
//!
//! assert!(root.validate().is_ok());
//! let paths: Vec<String> = root.paths().collect::<Result<_, _>>().unwrap();
//! assert_eq!(paths, vec!["null / Patrol", "null / Chase"]);
//! ```

mod error;
mod paths;
mod validation;

pub use error::ComposerError;
pub use paths::GraphPaths;

use crate::core::{Condition, State};
use crate::graph::{StateGraph, StateGraphLink};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct ComposerNode {
    state: Option<Rc<dyn State>>,
    nodes: Vec<StateGraphComposer>,
    links: Vec<StateGraphLink>,
}

/// Shared handle to one node description.
///
/// Cloning the handle does not copy the description: both clones refer to
/// the same node, and identity (not value) decides whether two handles are
/// the same child. This makes it possible to attach one description under
/// two parents, or under its own descendant; [`validate`](Self::validate)
/// rejects both.
#[derive(Clone)]
pub struct StateGraphComposer {
    inner: Rc<RefCell<ComposerNode>>,
}

impl StateGraphComposer {
    /// Create a description with an optional state, no children and no links.
    pub fn new(state: Option<Rc<dyn State>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ComposerNode {
                state,
                nodes: Vec::new(),
                links: Vec::new(),
            })),
        }
    }

    pub fn with_state(state: Rc<dyn State>) -> Self {
        Self::new(Some(state))
    }

    /// Description of a purely structural node without a state.
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Append a child description.
    ///
    /// Fails with [`ComposerError::InvalidArgument`] if this exact child is
    /// already one of this node's children.
    pub fn add_node(&self, child: &StateGraphComposer) -> Result<(), ComposerError> {
        if self.position(child).is_some() {
            return Err(ComposerError::InvalidArgument(
                "The child node was already added.".to_string(),
            ));
        }
        self.inner.borrow_mut().nodes.push(child.clone());
        Ok(())
    }

    /// Record a transition between two children of this node.
    ///
    /// Links are checked at runtime in the order they were added here; the
    /// first one whose condition holds wins. Fails with
    /// [`ComposerError::InvalidArgument`] if either child was not added to
    /// this node, or if the same `(from, to, condition)` link already exists.
    pub fn add_link(
        &self,
        from: &StateGraphComposer,
        to: &StateGraphComposer,
        condition: Rc<dyn Condition>,
    ) -> Result<(), ComposerError> {
        let from = self.position(from).ok_or_else(|| {
            ComposerError::InvalidArgument("The origin child node wasn't added.".to_string())
        })?;
        let to = self.position(to).ok_or_else(|| {
            ComposerError::InvalidArgument("The destination child node wasn't added.".to_string())
        })?;

        let mut node = self.inner.borrow_mut();
        if node.links.iter().any(|link| link.is_same(from, to, &condition)) {
            return Err(ComposerError::InvalidArgument(
                "The link was already added.".to_string(),
            ));
        }
        node.links.push(StateGraphLink::new(from, to, condition));
        Ok(())
    }

    /// Bake the runtime graph. Does not validate; see [`StateGraph::build`].
    pub fn build(self) -> StateGraph {
        StateGraph::build(&self)
    }

    /// Validate, then bake the runtime graph.
    pub fn build_validated(self) -> Result<StateGraph, ComposerError> {
        self.validate()?;
        Ok(self.build())
    }

    /// Lazily enumerate every root-to-leaf path as a human-readable string.
    ///
    /// Segments are the `Debug` rendering of each state (`null` for a node
    /// without one) joined by `" / "`. A structural cycle is yielded as an
    /// error and ends the sequence. Each call starts a fresh walk.
    pub fn paths(&self) -> GraphPaths {
        GraphPaths::new(self.clone())
    }

    pub fn state(&self) -> Option<Rc<dyn State>> {
        self.inner.borrow().state.clone()
    }

    /// Child descriptions in insertion order.
    pub fn nodes(&self) -> Vec<StateGraphComposer> {
        self.inner.borrow().nodes.clone()
    }

    /// Recorded links in insertion order.
    pub fn links(&self) -> Vec<StateGraphLink> {
        self.inner.borrow().links.clone()
    }

    /// Whether both handles refer to the same description.
    pub fn ptr_eq(&self, other: &StateGraphComposer) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn child(&self, index: usize) -> Option<StateGraphComposer> {
        self.inner.borrow().nodes.get(index).cloned()
    }

    pub(crate) fn has_children(&self) -> bool {
        !self.inner.borrow().nodes.is_empty()
    }

    fn position(&self, child: &StateGraphComposer) -> Option<usize> {
        self.inner
            .borrow()
            .nodes
            .iter()
            .position(|node| node.ptr_eq(child))
    }
}

impl fmt::Debug for StateGraphComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.inner.borrow();
        f.debug_struct("StateGraphComposer")
            .field("state", &node.state)
            .field("nodes", &node.nodes.len())
            .field("links", &node.links.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::{PrototypeCondition, PrototypeState};

    fn state(label: &str) -> Rc<dyn State> {
        Rc::new(PrototypeState::named(label))
    }

    fn condition(label: &str) -> Rc<dyn Condition> {
        Rc::new(PrototypeCondition::named(label))
    }

    #[test]
    fn new_composer_is_empty() {
        let composer = StateGraphComposer::with_state(state("Idle"));

        assert!(composer.nodes().is_empty());
        assert!(composer.links().is_empty());
        assert_eq!(format!("{:?}", composer.state().unwrap()), "Idle");
        assert!(StateGraphComposer::empty().state().is_none());
    }

    #[test]
    fn add_node_keeps_insertion_order() {
        let root = StateGraphComposer::empty();
        let first = StateGraphComposer::with_state(state("first"));
        let second = StateGraphComposer::with_state(state("second"));

        root.add_node(&first).unwrap();
        root.add_node(&second).unwrap();

        let nodes = root.nodes();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].ptr_eq(&first));
        assert!(nodes[1].ptr_eq(&second));
    }

    #[test]
    fn add_node_rejects_same_child_twice() {
        let root = StateGraphComposer::empty();
        let child = StateGraphComposer::empty();
        root.add_node(&child).unwrap();

        let result = root.add_node(&child.clone());

        assert!(matches!(result, Err(ComposerError::InvalidArgument(_))));
        assert_eq!(root.nodes().len(), 1);
    }

    #[test]
    fn add_node_accepts_equal_but_distinct_children() {
        let root = StateGraphComposer::empty();
        root.add_node(&StateGraphComposer::empty()).unwrap();
        root.add_node(&StateGraphComposer::empty()).unwrap();

        assert_eq!(root.nodes().len(), 2);
    }

    #[test]
    fn add_link_resolves_child_indices() {
        let root = StateGraphComposer::empty();
        let a = StateGraphComposer::empty();
        let b = StateGraphComposer::empty();
        root.add_node(&a).unwrap();
        root.add_node(&b).unwrap();

        root.add_link(&b, &a, condition("back")).unwrap();

        let links = root.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].from(), links[0].to()), (1, 0));
    }

    #[test]
    fn add_link_requires_added_children() {
        let root = StateGraphComposer::empty();
        let a = StateGraphComposer::empty();
        let stranger = StateGraphComposer::empty();
        root.add_node(&a).unwrap();

        assert!(matches!(
            root.add_link(&a, &stranger, condition("go")),
            Err(ComposerError::InvalidArgument(_))
        ));
        assert!(matches!(
            root.add_link(&stranger, &a, condition("go")),
            Err(ComposerError::InvalidArgument(_))
        ));
        assert!(root.links().is_empty());
    }

    #[test]
    fn add_link_rejects_duplicate_triple() {
        let root = StateGraphComposer::empty();
        let a = StateGraphComposer::empty();
        let b = StateGraphComposer::empty();
        root.add_node(&a).unwrap();
        root.add_node(&b).unwrap();
        let go = condition("go");

        root.add_link(&a, &b, go.clone()).unwrap();
        let duplicate = root.add_link(&a, &b, go.clone());

        assert!(matches!(duplicate, Err(ComposerError::InvalidArgument(_))));
        root.add_link(&b, &a, go.clone()).unwrap();
        root.add_link(&a, &b, condition("go")).unwrap();
        assert_eq!(root.links().len(), 3);
    }

    #[test]
    fn self_link_is_allowed() {
        let root = StateGraphComposer::empty();
        let a = StateGraphComposer::empty();
        root.add_node(&a).unwrap();

        assert!(root.add_link(&a, &a, condition("restart")).is_ok());
    }

    #[test]
    fn build_validated_rejects_invalid_tree() {
        let shared = state("shared");
        let root = StateGraphComposer::with_state(shared.clone());
        root.add_node(&StateGraphComposer::with_state(shared)).unwrap();

        let result = root.build_validated();

        assert!(matches!(result, Err(ComposerError::DuplicateState { .. })));
    }

    #[test]
    fn build_validated_bakes_valid_tree() {
        let root = StateGraphComposer::empty();
        root.add_node(&StateGraphComposer::with_state(state("leaf")))
            .unwrap();

        let graph = root.build_validated().unwrap();

        assert_eq!(graph.node_count(), 2);
    }
}
