//! State capability invoked by the graph on enter and exit.
//!
//! A state carries no structure of its own. The graph calls into it while the
//! node it is attached to becomes part of (or leaves) the active path.

use std::fmt::Debug;
use std::rc::Rc;

/// Behavior attached to a node of the state graph.
///
/// Both callbacks take `&self`: a state is shared between the caller and the
/// graph, so implementations keep mutable data in `Cell`/`RefCell`.
///
/// The `Debug` rendering is the state's identity in path strings and
/// validation errors.
///
/// A panic raised inside a callback unwinds to whoever called into the graph;
/// the graph does not catch it.
///
/// # Example
///
/// ```rust
/// use stategraph::core::State;
/// use std::cell::Cell;
///
/// #[derive(Debug, Default)]
/// struct Idle {
///     visits: Cell<u32>,
/// }
///
/// impl State for Idle {
///     fn enter(&self) {
///         self.visits.set(self.visits.get() + 1);
///     }
///
///     fn exit(&self) {}
/// }
///
/// let idle = Idle::default();
/// idle.enter();
/// assert_eq!(idle.visits.get(), 1);
/// ```
pub trait State: Debug {
    /// Called when the node becomes part of the active path.
    fn enter(&self);

    /// Called when the node leaves the active path.
    fn exit(&self);
}

/// Address of a shared capability, used for identity comparison.
///
/// Two handles are the same state (or condition) only when they point at the
/// same allocation, regardless of what their values compare to.
pub(crate) fn identity<T: ?Sized>(handle: &Rc<T>) -> *const () {
    Rc::as_ptr(handle) as *const ()
}

/// Label used for a path segment: the `Debug` rendering, or `null` for a
/// node without a state.
pub(crate) fn label(state: Option<&Rc<dyn State>>) -> String {
    match state {
        Some(state) => format!("{state:?}"),
        None => "null".to_string(),
    }
}
