//! Closure-backed state for prototyping graphs.

use crate::core::State;
use std::fmt;

type Callback = Box<dyn Fn()>;

/// State that runs optional closures on enter and exit.
///
/// # Example
///
/// ```rust
/// use stategraph::core::State;
/// use stategraph::prototype::PrototypeState;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let entered = Rc::new(Cell::new(false));
/// let flag = entered.clone();
/// let state = PrototypeState::named("Idle").on_enter(move || flag.set(true));
///
/// state.enter();
/// assert!(entered.get());
/// assert_eq!(format!("{state:?}"), "Idle");
/// ```
#[derive(Default)]
pub struct PrototypeState {
    label: Option<String>,
    on_enter: Option<Callback>,
    on_exit: Option<Callback>,
}

impl PrototypeState {
    /// Create a state with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state whose `Debug` rendering is `label`.
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Create a state from both callbacks at once.
    pub fn from_fns<E, X>(on_enter: E, on_exit: X) -> Self
    where
        E: Fn() + 'static,
        X: Fn() + 'static,
    {
        Self::new().on_enter(on_enter).on_exit(on_exit)
    }

    /// Set the enter callback.
    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_enter = Some(Box::new(callback));
        self
    }

    /// Set the exit callback.
    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_exit = Some(Box::new(callback));
        self
    }
}

impl State for PrototypeState {
    fn enter(&self) {
        if let Some(callback) = &self.on_enter {
            callback();
        }
    }

    fn exit(&self) {
        if let Some(callback) = &self.on_exit {
            callback();
        }
    }
}

impl fmt::Debug for PrototypeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.write_str(label),
            None => f.write_str("PrototypeState"),
        }
    }
}
