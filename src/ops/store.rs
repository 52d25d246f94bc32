use std::fmt;

use crate::model::{Intent, TodoState};

use super::task_ops;

/// Observer callback: the dispatched intent, the state after it was
/// handled, and whether the state changed.
pub type Subscriber = Box<dyn FnMut(&Intent, &TodoState, bool)>;

/// Owns the state and is the only way to change it from outside `ops`.
///
/// Each `dispatch` runs one handler to completion and then notifies every
/// subscriber in registration order.
#[derive(Default)]
pub struct Store {
    state: TodoState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&Intent, &TodoState, bool) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Apply `intent` and notify subscribers. Returns whether state changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let changed = task_ops::apply(&mut self.state, &intent);
        for subscriber in &mut self.subscribers {
            subscriber(&intent, &self.state, changed);
        }
        changed
    }

    /// Dispatch a sequence of intents in order
    pub fn dispatch_all(&mut self, intents: impl IntoIterator<Item = Intent>) {
        for intent in intents {
            self.dispatch(intent);
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
