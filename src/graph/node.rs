//! Runtime node of the state graph and the enter/exit/transition protocol.

use crate::composer::StateGraphComposer;
use crate::core::{label, ListenerId, State};
use crate::graph::link::StateGraphLink;
use crate::graph::snapshot::PathSegment;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

/// One vertex of the hierarchy.
///
/// Children and links are fixed when the node is built. At most one child is
/// active at a time, and only while the node is entered.
pub(crate) struct GraphNode {
    state: Option<Rc<dyn State>>,
    nodes: Box<[Rc<GraphNode>]>,
    links: Box<[StateGraphLink]>,
    entered: Cell<bool>,
    transitioning: Cell<bool>,
    active: Cell<Option<usize>>,
    /// Listeners registered on conditions of links leaving the active child,
    /// keyed by link index.
    subscriptions: RefCell<Vec<(usize, ListenerId)>>,
    this: Weak<GraphNode>,
}

/// Holds a node's `transitioning` flag for the length of a scope.
///
/// Released on unwind too, so a panicking state callback does not leave the
/// node ignoring every later call.
struct TransitionGuard<'a>(&'a Cell<bool>);

impl<'a> TransitionGuard<'a> {
    fn hold(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for TransitionGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl GraphNode {
    /// Recursively bake a composer into runtime nodes. Does not validate.
    pub(crate) fn build(composer: &StateGraphComposer) -> Rc<GraphNode> {
        let nodes: Box<[Rc<GraphNode>]> = composer.nodes().iter().map(GraphNode::build).collect();
        let links: Box<[StateGraphLink]> = composer.links().into_boxed_slice();
        let state = composer.state();
        Rc::new_cyclic(|this| GraphNode {
            state,
            nodes,
            links,
            entered: Cell::new(false),
            transitioning: Cell::new(false),
            active: Cell::new(None),
            subscriptions: RefCell::new(Vec::new()),
            this: this.clone(),
        })
    }

    pub(crate) fn enter(&self) {
        if self.entered.get() {
            warn!(
                state = %label(self.state.as_ref()),
                "Trying to enter a state that is already entered. Ignoring"
            );
            return;
        }
        if self.transitioning.get() {
            warn!(
                state = %label(self.state.as_ref()),
                "Trying to enter a state that is transitioning. Ignoring"
            );
            return;
        }

        {
            let _guard = TransitionGuard::hold(&self.transitioning);
            if let Some(state) = &self.state {
                state.enter();
            }
            match self.nodes.first() {
                None => self.change_active(None),
                Some(first) => {
                    self.change_active(Some(0));
                    first.enter();
                }
            }
        }
        self.entered.set(true);
        self.check_active_conditions();
    }

    pub(crate) fn exit(&self) {
        if !self.entered.get() {
            warn!(
                state = %label(self.state.as_ref()),
                "Trying to exit a state that is not entered. Ignoring"
            );
            return;
        }
        if self.is_busy() {
            warn!(
                state = %label(self.state.as_ref()),
                "Trying to exit a state that is transitioning. Ignoring"
            );
            return;
        }

        {
            let _guard = TransitionGuard::hold(&self.transitioning);
            if let Some(index) = self.active.get() {
                self.nodes[index].exit();
                self.change_active(None);
            }
            if let Some(state) = &self.state {
                state.exit();
            }
        }
        self.entered.set(false);
    }

    /// Take the first link leaving the active child whose condition holds.
    ///
    /// Runs at most one transition. Ignored while the node is not entered or
    /// is already transitioning.
    pub(crate) fn check_active_conditions(&self) {
        if !self.entered.get() || self.transitioning.get() {
            return;
        }
        let Some(active) = self.active.get() else {
            return;
        };
        let Some(link) = self
            .links
            .iter()
            .find(|link| link.from() == active && link.condition().check_condition())
        else {
            return;
        };

        let current = &self.nodes[active];
        if current.is_busy() {
            // Something on the active path is mid-transition and would ignore
            // the exit. The condition stays met for the next check.
            debug!(
                from = active,
                to = link.to(),
                "Active path is transitioning, postponing sibling transition"
            );
            return;
        }

        let to = link.to();
        debug!(
            from = active,
            to,
            condition = ?link.condition(),
            "Transitioning between sibling states"
        );
        let _guard = TransitionGuard::hold(&self.transitioning);
        current.exit();
        self.change_active(Some(to));
        self.nodes[to].enter();
    }

    /// Whether this node or any node below it on the active path is
    /// mid-transition.
    fn is_busy(&self) -> bool {
        self.transitioning.get()
            || self
                .active
                .get()
                .is_some_and(|index| self.nodes[index].is_busy())
    }

    /// Move the active child, disarming the links of the previous one and
    /// arming the links of the new one.
    fn change_active(&self, to: Option<usize>) {
        if self.active.get().is_some() {
            let subscriptions = std::mem::take(&mut *self.subscriptions.borrow_mut());
            for (link_index, id) in subscriptions {
                let condition = self.links[link_index].condition();
                condition.triggered().unsubscribe(id);
                condition.set_active(false);
                trace!(link = link_index, condition = ?condition, "Condition disarmed");
            }
        }

        self.active.set(to);

        if let Some(origin) = to {
            for (link_index, link) in self.links.iter().enumerate() {
                if link.from() != origin {
                    continue;
                }
                let node = self.this.clone();
                let id = link.condition().triggered().subscribe(move || {
                    if let Some(node) = node.upgrade() {
                        node.check_active_conditions();
                    }
                });
                self.subscriptions.borrow_mut().push((link_index, id));
                link.condition().set_active(true);
                trace!(link = link_index, condition = ?link.condition(), "Condition armed");
            }
        }
    }

    pub(crate) fn enumerate_active_path(
        &self,
        visit: &mut dyn FnMut(Option<&Rc<dyn State>>),
        skip_empty_states: bool,
    ) {
        if self.state.is_some() || !skip_empty_states {
            visit(self.state.as_ref());
        }
        if let Some(index) = self.active.get() {
            self.nodes[index].enumerate_active_path(visit, skip_empty_states);
        }
    }

    /// Walk the active path root first, one segment per level.
    pub(crate) fn collect_active_path(&self, segments: &mut Vec<PathSegment>) {
        let active = self.active.get();
        segments.push(PathSegment {
            state: self.state.as_ref().map(|state| format!("{state:?}")),
            active_child: active,
        });
        if let Some(index) = active {
            self.nodes[index].collect_active_path(segments);
        }
    }

    pub(crate) fn is_entered(&self) -> bool {
        self.entered.get()
    }

    pub(crate) fn is_transitioning(&self) -> bool {
        self.transitioning.get()
    }

    pub(crate) fn active_index(&self) -> Option<usize> {
        self.active.get()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn link_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn node_count(&self) -> usize {
        1 + self.nodes.iter().map(|node| node.node_count()).sum::<usize>()
    }

    pub(crate) fn child(&self, index: usize) -> Option<&Rc<GraphNode>> {
        self.nodes.get(index)
    }
}

impl Drop for GraphNode {
    fn drop(&mut self) {
        for (link_index, id) in self.subscriptions.get_mut().drain(..) {
            let condition = self.links[link_index].condition();
            condition.triggered().unsubscribe(id);
            condition.set_active(false);
        }
    }
}
