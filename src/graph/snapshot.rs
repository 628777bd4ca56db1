//! Serializable view of the active path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the active path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    /// `Debug` rendering of the node's state, `None` for a stateless node
    pub state: Option<String>,
    /// Index of the active child, `None` at the leaf
    pub active_child: Option<usize>,
}

/// Snapshot of the chain of nodes from the root to the active leaf.
///
/// Empty while the graph is not entered. Renders with `Display` the same way
/// as the path strings produced by the composer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePath {
    segments: Vec<PathSegment>,
}

impl ActivePath {
    pub(crate) fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Active child index at every level above the leaf, root first.
    pub fn indices(&self) -> Vec<usize> {
        self.segments
            .iter()
            .filter_map(|segment| segment.active_child)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ActivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                f.write_str(" / ")?;
            }
            f.write_str(segment.state.as_deref().unwrap_or("null"))?;
        }
        Ok(())
    }
}
