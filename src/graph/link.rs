//! Transition edges between sibling nodes.

use crate::core::{identity, Condition};
use std::rc::Rc;

/// Condition-guarded transition between two children of the same node.
///
/// Links are immutable. `from` and `to` are child indices in insertion order
/// of the parent they were recorded on.
#[derive(Clone, Debug)]
pub struct StateGraphLink {
    from: usize,
    to: usize,
    condition: Rc<dyn Condition>,
}

impl StateGraphLink {
    pub(crate) fn new(from: usize, to: usize, condition: Rc<dyn Condition>) -> Self {
        Self {
            from,
            to,
            condition,
        }
    }

    /// Index of the origin child.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Index of the destination child.
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn condition(&self) -> &Rc<dyn Condition> {
        &self.condition
    }

    /// Same endpoints and the very same condition object.
    pub(crate) fn is_same(&self, from: usize, to: usize, condition: &Rc<dyn Condition>) -> bool {
        self.from == from && self.to == to && identity(&self.condition) == identity(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::PrototypeCondition;

    #[test]
    fn same_link_requires_identical_condition() {
        let condition: Rc<dyn Condition> = Rc::new(PrototypeCondition::named("go"));
        let lookalike: Rc<dyn Condition> = Rc::new(PrototypeCondition::named("go"));
        let link = StateGraphLink::new(0, 1, condition.clone());

        assert!(link.is_same(0, 1, &condition));
        assert!(!link.is_same(0, 1, &lookalike));
        assert!(!link.is_same(1, 0, &condition));
    }

    #[test]
    fn accessors_expose_endpoints() {
        let link = StateGraphLink::new(2, 0, Rc::new(PrototypeCondition::new()));

        assert_eq!(link.from(), 2);
        assert_eq!(link.to(), 0);
        assert_eq!(format!("{:?}", link.condition()), "PrototypeCondition");
    }
}
