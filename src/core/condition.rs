//! Condition capability guarding transitions between sibling nodes.
//!
//! Conditions are evaluated synchronously by the graph. They are only armed
//! while the sibling a link originates from is active, and they notify the
//! graph through their [`Trigger`] instead of waiting for an external poll.

use super::trigger::Trigger;
use std::fmt::Debug;

/// Predicate attached to a link between two sibling nodes.
///
/// The graph calls [`set_active(true)`](Condition::set_active) and subscribes
/// to [`triggered`](Condition::triggered) when the link's origin becomes the
/// active sibling, and reverses both when it stops being active. An active
/// condition should track whatever it observes and fire its trigger once it
/// is met.
///
/// # Example
///
/// ```rust
/// use stategraph::core::{Condition, Trigger};
/// use std::cell::Cell;
///
/// #[derive(Debug, Default)]
/// struct Threshold {
///     level: Cell<u32>,
///     armed: Cell<bool>,
///     trigger: Trigger,
/// }
///
/// impl Threshold {
///     fn raise(&self, amount: u32) {
///         self.level.set(self.level.get() + amount);
///         if self.armed.get() && self.check_condition() {
///             self.trigger.fire();
///         }
///     }
/// }
///
/// impl Condition for Threshold {
///     fn set_active(&self, active: bool) {
///         self.armed.set(active);
///         self.level.set(0);
///     }
///
///     fn check_condition(&self) -> bool {
///         self.level.get() >= 10
///     }
///
///     fn triggered(&self) -> &Trigger {
///         &self.trigger
///     }
/// }
///
/// let threshold = Threshold::default();
/// threshold.set_active(true);
/// threshold.raise(4);
/// assert!(!threshold.check_condition());
/// threshold.raise(6);
/// assert!(threshold.check_condition());
/// ```
pub trait Condition: Debug {
    /// Arm or disarm the condition.
    ///
    /// Also the place to reset internal tracking between uses.
    fn set_active(&self, active: bool);

    /// Whether the condition is currently met.
    ///
    /// Must not have side effects; the graph may call it at any time.
    fn check_condition(&self) -> bool;

    /// Channel the condition raises to ask the graph for a re-check.
    fn triggered(&self) -> &Trigger;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Switch {
        on: Cell<bool>,
        active: Cell<bool>,
        trigger: Trigger,
    }

    impl Switch {
        fn flip(&self) {
            self.on.set(true);
            if self.active.get() {
                self.trigger.fire();
            }
        }
    }

    impl Condition for Switch {
        fn set_active(&self, active: bool) {
            self.active.set(active);
        }

        fn check_condition(&self) -> bool {
            self.on.get()
        }

        fn triggered(&self) -> &Trigger {
            &self.trigger
        }
    }

    #[test]
    fn check_condition_is_repeatable() {
        let switch = Switch::default();
        switch.on.set(true);

        assert_eq!(switch.check_condition(), switch.check_condition());
    }

    #[test]
    fn inactive_condition_does_not_notify() {
        let switch = Switch::default();
        let hits = Rc::new(Cell::new(0));
        let counted = hits.clone();
        switch
            .triggered()
            .subscribe(move || counted.set(counted.get() + 1));

        switch.flip();
        assert_eq!(hits.get(), 0);

        switch.set_active(true);
        switch.flip();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn works_as_trait_object() {
        let switch = Rc::new(Switch::default());
        let condition: Rc<dyn Condition> = switch.clone();

        condition.set_active(true);
        assert!(switch.active.get());
        assert!(!condition.check_condition());

        switch.flip();
        assert!(condition.check_condition());
    }
}
