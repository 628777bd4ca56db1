//! Errors raised while composing and validating a state graph.

use thiserror::Error;

/// Structural errors in a graph description.
///
/// These point at a mistake in how the graph was put together; the fix is to
/// change the composition, not to recover at runtime.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("The graph path contains a loop or a node reachable from two parents. (Path: {path})")]
    StructuralCycle { path: String },

    #[error("The same state ({state}) is used more than once in the graph path. (Path: {path})")]
    DuplicateState { state: String, path: String },

    #[error("The same condition ({condition}) is used on multiple levels of the graph path. (Path: {path})")]
    DuplicateCondition { condition: String, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_path() {
        let error = ComposerError::DuplicateCondition {
            condition: "spotted".to_string(),
            path: "null / Patrol / Walk".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "The same condition (spotted) is used on multiple levels of the graph path. (Path: null / Patrol / Walk)"
        );
    }

    #[test]
    fn invalid_argument_reads_naturally() {
        let error = ComposerError::InvalidArgument("The child node was already added.".to_string());

        assert_eq!(
            error.to_string(),
            "Invalid argument: The child node was already added."
        );
    }
}
