//! Structural validation of composer trees.
//!
//! Every root-to-leaf path is checked on its own: a state may appear only
//! once along a path, and a condition may guard links on only one level of
//! it. Reusing either across levels of one active path would make the
//! enter/exit order or the owner of a transition ambiguous.

use super::paths::{format_path, PathWalker};
use super::{ComposerError, StateGraphComposer};
use crate::core::identity;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

impl StateGraphComposer {
    /// Check the tree for cycles and for ambiguous reuse along any path.
    ///
    /// Stops at the first problem found:
    /// - [`ComposerError::StructuralCycle`] if a node recurs on a path or is
    ///   reachable from two parents
    /// - [`ComposerError::DuplicateState`] if one state object appears twice
    ///   on a path
    /// - [`ComposerError::DuplicateCondition`] if one condition object guards
    ///   links on more than one level of a path
    pub fn validate(&self) -> Result<(), ComposerError> {
        let mut checked = 0usize;
        for path in PathWalker::new(self.clone()) {
            check_path(&path?)?;
            checked += 1;
        }
        debug!(paths = checked, "State graph composition validated");
        Ok(())
    }

    /// Check the tree like [`validate`](Self::validate), collecting every
    /// violation instead of stopping at the first one.
    ///
    /// Each path contributes at most one violation. A structural cycle ends
    /// the walk; violations found before it are still reported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stategraph::composer::{ComposerError, StateGraphComposer};
    /// use stategraph::core::State;
    /// use stategraph::prototype::PrototypeState;
    /// use std::rc::Rc;
    /// use stillwater::validation::Validation;
    ///
    /// let reused: Rc<dyn State> = Rc::new(PrototypeState::named("reused"));
    /// let root = StateGraphComposer::with_state(reused.clone());
    /// root.add_node(&StateGraphComposer::with_state(reused.clone())).unwrap();
    /// root.add_node(&StateGraphComposer::with_state(reused)).unwrap();
    ///
    /// match root.validate_all() {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("expected violations"),
    /// }
    /// ```
    pub fn validate_all(&self) -> Validation<(), NonEmptyVec<ComposerError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ComposerError>>> =
            PathWalker::new(self.clone())
                .map(|path| match path.and_then(|segments| check_path(&segments)) {
                    Ok(()) => Validation::success(()),
                    Err(error) => Validation::fail(error),
                })
                .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_path(segments: &[StateGraphComposer]) -> Result<(), ComposerError> {
    let mut states = HashSet::new();
    let mut conditions = HashSet::new();

    for segment in segments {
        if let Some(state) = segment.state() {
            if !states.insert(identity(&state)) {
                return Err(ComposerError::DuplicateState {
                    state: format!("{state:?}"),
                    path: format_path(segments),
                });
            }
        }

        let mut level = HashSet::new();
        for link in segment.links() {
            let condition = identity(link.condition());
            if level.insert(condition) && !conditions.insert(condition) {
                return Err(ComposerError::DuplicateCondition {
                    condition: format!("{:?}", link.condition()),
                    path: format_path(segments),
                });
            }
        }
    }
    Ok(())
}
