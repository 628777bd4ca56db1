//! Ready-made conditions for prototyping graphs.

use crate::core::{Condition, Trigger};
use std::cell::Cell;
use std::fmt;

/// Condition that acts like a trigger button.
///
/// [`trigger`](PrototypeCondition::trigger) latches the value to `true` and
/// fires the notification channel. Any call to `set_active` clears the latch,
/// so a press is only remembered while the link is armed.
///
/// # Example
///
/// ```rust
/// use stategraph::core::Condition;
/// use stategraph::prototype::PrototypeCondition;
///
/// let button = PrototypeCondition::named("spotted");
/// assert!(!button.check_condition());
///
/// button.trigger();
/// assert!(button.check_condition());
///
/// button.set_active(true);
/// assert!(!button.check_condition());
/// ```
#[derive(Default)]
pub struct PrototypeCondition {
    label: Option<String>,
    value: Cell<bool>,
    triggered: Trigger,
}

impl PrototypeCondition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a condition whose `Debug` rendering is `label`.
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Latch the value to `true` and notify listeners.
    pub fn trigger(&self) {
        self.value.set(true);
        self.triggered.fire();
    }
}

impl Condition for PrototypeCondition {
    fn set_active(&self, _active: bool) {
        self.value.set(false);
    }

    fn check_condition(&self) -> bool {
        self.value.get()
    }

    fn triggered(&self) -> &Trigger {
        &self.triggered
    }
}

impl fmt::Debug for PrototypeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.write_str(label),
            None => f.write_str("PrototypeCondition"),
        }
    }
}

/// Condition backed by a predicate closure.
///
/// The predicate is only consulted while the condition is active; an inactive
/// `FnCondition` always reports `false`. Because the graph checks conditions
/// right after a node is entered, a predicate that already holds causes an
/// immediate transition.
///
/// Call [`notify`](FnCondition::notify) when whatever the predicate observes
/// has changed.
pub struct FnCondition {
    label: Option<String>,
    predicate: Box<dyn Fn() -> bool>,
    active: Cell<bool>,
    triggered: Trigger,
}

impl FnCondition {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self {
            label: None,
            predicate: Box::new(predicate),
            active: Cell::new(false),
            triggered: Trigger::new(),
        }
    }

    /// Set the `Debug` rendering of the condition.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Ask listeners to re-check the predicate.
    pub fn notify(&self) {
        self.triggered.fire();
    }
}

impl Condition for FnCondition {
    fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    fn check_condition(&self) -> bool {
        self.active.get() && (self.predicate)()
    }

    fn triggered(&self) -> &Trigger {
        &self.triggered
    }
}

impl fmt::Debug for FnCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.write_str(label),
            None => f
                .debug_struct("FnCondition")
                .field("active", &self.active.get())
                .finish_non_exhaustive(),
        }
    }
}
