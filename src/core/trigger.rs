//! Notification channel raised by conditions.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Trigger::subscribe`], used to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn()>;

/// Listener registry owned by a condition.
///
/// The graph subscribes while the link's origin sibling is active and
/// unsubscribes when it stops being active. A condition calls [`fire`](Self::fire)
/// when it wants the graph to re-check it, typically once it becomes true.
///
/// `fire` dispatches to the listeners registered at the moment of the call.
/// Listeners may subscribe or unsubscribe during dispatch; the change applies
/// to the next `fire`.
#[derive(Default)]
pub struct Trigger {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its id.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|(current, _)| *current == id) {
            Some(position) => {
                listeners.remove(position);
                true
            }
            None => false,
        }
    }

    /// Invoke every listener, in registration order.
    pub fn fire(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
