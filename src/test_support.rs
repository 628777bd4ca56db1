//! Helpers shared by the unit tests.

use crate::core::State;
use crate::prototype::PrototypeState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

pub(crate) fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// State that appends `"<name>.enter"` / `"<name>.exit"` to `journal`.
pub(crate) fn recording_state(name: &str, journal: &Journal) -> Rc<dyn State> {
    let on_enter = journal.clone();
    let on_exit = journal.clone();
    let enter_entry = format!("{name}.enter");
    let exit_entry = format!("{name}.exit");
    Rc::new(
        PrototypeState::named(name)
            .on_enter(move || on_enter.borrow_mut().push(enter_entry.clone()))
            .on_exit(move || on_exit.borrow_mut().push(exit_entry.clone())),
    )
}

/// Drain the journal.
pub(crate) fn take(journal: &Journal) -> Vec<String> {
    std::mem::take(&mut *journal.borrow_mut())
}

struct WarningCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` and count the warning events it emits.
pub(crate) fn count_warnings<F: FnOnce()>(f: F) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarningCounter(count.clone()));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}
