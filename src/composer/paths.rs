//! Depth-first enumeration of root-to-leaf paths in a composer tree.

use super::{ComposerError, StateGraphComposer};
use crate::core::label;
use std::collections::HashSet;
use std::iter::FusedIterator;
use std::rc::Rc;

struct Frame {
    node: StateGraphComposer,
    next_child: usize,
}

/// Lazy walk over every root-to-leaf path, yielding the path's nodes.
///
/// A node that recurs among its own ancestors, or that is reached a second
/// time through another parent, ends the walk with
/// [`ComposerError::StructuralCycle`].
pub(crate) struct PathWalker {
    root: Option<StateGraphComposer>,
    stack: Vec<Frame>,
    seen: HashSet<*const ()>,
    done: bool,
}

impl PathWalker {
    pub(crate) fn new(root: StateGraphComposer) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
            seen: HashSet::new(),
            done: false,
        }
    }

    fn cycle(&mut self, child: &StateGraphComposer) -> ComposerError {
        self.done = true;
        let segments: Vec<StateGraphComposer> = self
            .stack
            .iter()
            .map(|frame| frame.node.clone())
            .chain(std::iter::once(child.clone()))
            .collect();
        ComposerError::StructuralCycle {
            path: format_path(&segments),
        }
    }
}

impl Iterator for PathWalker {
    type Item = Result<Vec<StateGraphComposer>, ComposerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(root) = self.root.take() {
            self.seen.insert(composer_identity(&root));
            if !root.has_children() {
                self.done = true;
                return Some(Ok(vec![root]));
            }
            self.stack.push(Frame {
                node: root,
                next_child: 0,
            });
        }

        loop {
            let next = match self.stack.last_mut() {
                Some(frame) => {
                    let child = frame.node.child(frame.next_child);
                    if child.is_some() {
                        frame.next_child += 1;
                    }
                    child
                }
                None => {
                    self.done = true;
                    return None;
                }
            };
            let Some(child) = next else {
                self.stack.pop();
                continue;
            };

            if self.stack.iter().any(|frame| frame.node.ptr_eq(&child)) {
                return Some(Err(self.cycle(&child)));
            }
            if !self.seen.insert(composer_identity(&child)) {
                return Some(Err(self.cycle(&child)));
            }

            if !child.has_children() {
                let path = self
                    .stack
                    .iter()
                    .map(|frame| frame.node.clone())
                    .chain(std::iter::once(child))
                    .collect();
                return Some(Ok(path));
            }
            self.stack.push(Frame {
                node: child,
                next_child: 0,
            });
        }
    }
}

impl FusedIterator for PathWalker {}

/// Human-readable root-to-leaf paths of a composer tree.
///
/// Returned by [`StateGraphComposer::paths`]. Yields one string per path,
/// depth first in child insertion order. A structural cycle is yielded as an
/// error, after which the iterator is exhausted.
pub struct GraphPaths {
    walker: PathWalker,
}

impl GraphPaths {
    pub(crate) fn new(root: StateGraphComposer) -> Self {
        Self {
            walker: PathWalker::new(root),
        }
    }
}

impl Iterator for GraphPaths {
    type Item = Result<String, ComposerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walker
            .next()
            .map(|path| path.map(|segments| format_path(&segments)))
    }
}

impl FusedIterator for GraphPaths {}

pub(crate) fn format_path(segments: &[StateGraphComposer]) -> String {
    segments
        .iter()
        .map(|segment| label(segment.state().as_ref()))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn composer_identity(composer: &StateGraphComposer) -> *const () {
    Rc::as_ptr(&composer.inner) as *const ()
}
