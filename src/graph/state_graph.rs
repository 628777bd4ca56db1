//! Handle to a baked state graph.

use crate::composer::StateGraphComposer;
use crate::core::State;
use crate::graph::node::GraphNode;
use crate::graph::snapshot::ActivePath;
use std::fmt;
use std::rc::Rc;

/// Immutable hierarchical state machine built from a [`StateGraphComposer`].
///
/// The structure never changes after the build. Only the entered flags and
/// the active child of each node move, through [`enter`](Self::enter),
/// [`exit`](Self::exit) and the notifications of armed conditions.
///
/// Every call runs to completion on the calling thread. Conditions must fire
/// their triggers from the same thread that drives the graph.
///
/// # Example
///
/// ```rust
/// use stategraph::composer::StateGraphComposer;
/// use stategraph::prototype::{PrototypeCondition, PrototypeState};
/// use std::rc::Rc;
///
/// let root = StateGraphComposer::empty();
/// let idle = StateGraphComposer::with_state(Rc::new(PrototypeState::named("Idle")));
/// let walk = StateGraphComposer::with_state(Rc::new(PrototypeState::named("Walk")));
/// root.add_node(&idle).unwrap();
/// root.add_node(&walk).unwrap();
///
/// let moved = Rc::new(PrototypeCondition::named("moved"));
/// root.add_link(&idle, &walk, moved.clone()).unwrap();
/// root.validate().unwrap();
///
/// let graph = root.build();
/// graph.enter();
/// assert_eq!(graph.active_path().to_string(), "null / Idle");
///
/// moved.trigger();
/// assert_eq!(graph.active_path().to_string(), "null / Walk");
///
/// graph.exit();
/// assert!(graph.active_path().is_empty());
/// ```
pub struct StateGraph {
    root: Rc<GraphNode>,
}

impl StateGraph {
    /// Build the runtime graph described by `composer`.
    ///
    /// The composer is not validated; call
    /// [`StateGraphComposer::validate`] first to rule out cycles and
    /// ambiguous reuse. Building a composer that contains a cycle never
    /// terminates.
    pub fn build(composer: &StateGraphComposer) -> Self {
        Self {
            root: GraphNode::build(composer),
        }
    }

    /// Enter the root state, then the first child at every level.
    ///
    /// Runs one round of condition checks afterwards, so links whose
    /// conditions already hold are taken immediately. Ignored, with a
    /// warning, if the graph is already entered or is transitioning.
    pub fn enter(&self) {
        self.root.enter();
    }

    /// Exit the active path leaf first, ending with the root state.
    ///
    /// Ignored, with a warning, if the graph is not entered or is
    /// transitioning.
    pub fn exit(&self) {
        self.root.exit();
    }

    /// Re-check the links leaving the root's active child.
    ///
    /// Conditions normally prompt this themselves through their trigger; this
    /// is for drivers that poll.
    pub fn check_active_conditions(&self) {
        self.root.check_active_conditions();
    }

    /// Call `visit` with the state of every node on the active path, root
    /// first. Stateless nodes are passed as `None` unless
    /// `skip_empty_states` is set, in which case they are left out.
    pub fn enumerate_active_path<F>(&self, mut visit: F, skip_empty_states: bool)
    where
        F: FnMut(Option<&Rc<dyn State>>),
    {
        self.root
            .enumerate_active_path(&mut visit, skip_empty_states);
    }

    /// Snapshot of the active path. Empty while the graph is not entered.
    pub fn active_path(&self) -> ActivePath {
        let mut segments = Vec::new();
        if self.root.is_entered() {
            self.root.collect_active_path(&mut segments);
        }
        ActivePath::new(segments)
    }

    /// Active child index at every level of the active path, root first.
    pub fn active_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut node = &self.root;
        while let Some(index) = node.active_index() {
            indices.push(index);
            match node.child(index) {
                Some(child) => node = child,
                None => break,
            }
        }
        indices
    }

    pub fn is_entered(&self) -> bool {
        self.root.is_entered()
    }

    pub fn is_transitioning(&self) -> bool {
        self.root.is_transitioning()
    }

    /// Index of the root's active child.
    pub fn active_index(&self) -> Option<usize> {
        self.root.active_index()
    }

    /// Number of nodes in the whole tree, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of direct children of the root.
    pub fn child_count(&self) -> usize {
        self.root.child_count()
    }

    /// Number of links between the root's children.
    pub fn link_count(&self) -> usize {
        self.root.link_count()
    }
}

impl fmt::Debug for StateGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateGraph")
            .field("entered", &self.is_entered())
            .field("active_path", &self.active_path().to_string())
            .field("nodes", &self.node_count())
            .finish()
    }
}
