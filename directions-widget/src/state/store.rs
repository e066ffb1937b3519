//! Observable state container.
//!
//! `Store` holds the current snapshot, applies actions through [`reduce`],
//! and notifies subscribers after every change. It is single-threaded:
//! snapshots are shared as `Rc` and listeners run synchronously.
//!
//! Intents dispatched from inside a listener are queued and applied after
//! the current notification finishes, so every handler runs to completion
//! against an unchanging snapshot. Everything queued during one notification
//! is applied as a batch followed by a single notification. Deferred intents
//! run once the immediate queue is empty.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::reducer::reduce;
use super::{Action, ActionSink, DirectionsState};

/// A state-change listener. Re-reads the snapshot via `get_state`.
pub type Listener = Box<dyn Fn()>;

/// Read access to the shared state, plus change notification.
pub trait StateSource {
    /// The current snapshot.
    fn get_state(&self) -> Rc<DirectionsState>;

    /// Register a listener invoked after every state change.
    fn subscribe(&self, listener: Listener);
}

/// Reference state container.
pub struct Store {
    state: RefCell<Rc<DirectionsState>>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
    queue: RefCell<VecDeque<Action>>,
    deferred: RefCell<VecDeque<Action>>,
    dispatching: Cell<bool>,
}

impl Store {
    /// Create a store holding `initial`.
    pub fn new(initial: DirectionsState) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            listeners: RefCell::new(Vec::new()),
            queue: RefCell::new(VecDeque::new()),
            deferred: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Notify every listener without changing state.
    ///
    /// Used to run an initial synchronization pass over a seeded snapshot.
    pub fn notify(&self) {
        if self.dispatching.get() {
            return;
        }
        let _guard = DispatchGuard::enter(&self.dispatching);
        self.notify_listeners();
        self.drain();
    }

    fn run(&self, first: Action) {
        let _guard = DispatchGuard::enter(&self.dispatching);
        self.apply(vec![first]);
        self.drain();
    }

    fn drain(&self) {
        loop {
            let batch: Vec<Action> = {
                let mut queue = self.queue.borrow_mut();
                if queue.is_empty() {
                    self.deferred.borrow_mut().drain(..).collect()
                } else {
                    queue.drain(..).collect()
                }
            };
            if batch.is_empty() {
                break;
            }
            self.apply(batch);
        }
    }

    fn apply(&self, actions: Vec<Action>) {
        let next = {
            let current = self.state.borrow();
            actions.into_iter().fold(DirectionsState::clone(&current), |state, action| {
                tracing::trace!(action = action.name(), "applying action");
                reduce(&state, action)
            })
        };
        *self.state.borrow_mut() = Rc::new(next);
        self.notify_listeners();
    }

    fn notify_listeners(&self) {
        // Cloned so listeners may subscribe while being notified.
        let listeners: Vec<Rc<dyn Fn()>> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl StateSource for Store {
    fn get_state(&self) -> Rc<DirectionsState> {
        Rc::clone(&self.state.borrow())
    }

    fn subscribe(&self, listener: Listener) {
        self.listeners.borrow_mut().push(Rc::from(listener));
    }
}

impl ActionSink for Store {
    fn dispatch(&self, action: Action) {
        if self.dispatching.get() {
            self.queue.borrow_mut().push_back(action);
        } else {
            self.run(action);
        }
    }

    fn dispatch_deferred(&self, action: Action) {
        if self.dispatching.get() {
            self.deferred.borrow_mut().push_back(action);
        } else {
            self.run(action);
        }
    }
}

/// Marks the store as dispatching; resets the flag on drop, including
/// during unwinding from a panicking listener.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    fn recording_listener(store: &Rc<Store>, log: &Rc<RefCell<Vec<String>>>, name: &'static str) {
        let weak = Rc::downgrade(store);
        let log = Rc::clone(log);
        store.subscribe(Box::new(move || {
            if let Some(store) = weak.upgrade() {
                let state = store.get_state();
                log.borrow_mut()
                    .push(format!("{name}:{:?}:{}", state.origin_query, state.refresh));
            }
        }));
    }

    #[test]
    fn dispatch_updates_state_and_notifies() {
        let store = Rc::new(Store::new(DirectionsState::default()));
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(Box::new(move || counter.set(counter.get() + 1)));

        store.create_origin(Coordinates::new(1.0, 2.0));

        assert_eq!(calls.get(), 1);
        assert_eq!(
            store.get_state().origin.as_ref().unwrap().coordinates(),
            Coordinates::new(1.0, 2.0)
        );
    }

    #[test]
    fn nested_dispatch_is_queued_until_listeners_return() {
        let store = Rc::new(Store::new(DirectionsState::default()));
        let log = Rc::new(RefCell::new(Vec::new()));

        // First listener consumes the one-shot field.
        let weak = Rc::downgrade(&store);
        store.subscribe(Box::new(move || {
            if let Some(store) = weak.upgrade() {
                if store.get_state().origin_query.is_some() {
                    store.query_origin(None);
                }
            }
        }));
        // Second listener still sees the original snapshot.
        recording_listener(&store, &log, "second");

        store.query_origin(Some("Rome".into()));

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], "second:Some(Text(\"Rome\")):false");
        assert_eq!(log[1], "second:None:false");
        assert!(store.get_state().origin_query.is_none());
    }

    #[test]
    fn deferred_runs_after_immediate_queue() {
        let store = Rc::new(Store::new(DirectionsState::default()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&store);
        store.subscribe(Box::new(move || {
            if let Some(store) = weak.upgrade() {
                let state = store.get_state();
                if state.refresh && state.origin_query.is_none() {
                    store.clear_refresh();
                    store.query_origin(Some("queued".into()));
                }
            }
        }));
        recording_listener(&store, &log, "l");

        store.reverse();

        let log = log.borrow();
        // reverse, then the immediate query, then the deferred clear
        assert_eq!(log.len(), 3);
        assert_eq!(log[0], "l:None:true");
        assert_eq!(log[1], "l:Some(Text(\"queued\")):true");
        assert_eq!(log[2], "l:Some(Text(\"queued\")):false");
    }

    #[test]
    fn intents_queued_in_one_pass_are_applied_together() {
        let store = Rc::new(Store::new(DirectionsState {
            origin_query: Some("A".into()),
            destination_query: Some("B".into()),
            ..DirectionsState::default()
        }));
        let log = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&store);
        store.subscribe(Box::new(move || {
            if let Some(store) = weak.upgrade() {
                let state = store.get_state();
                if state.origin_query.is_some() {
                    store.query_origin(None);
                }
                if state.destination_query.is_some() {
                    store.query_destination(None);
                }
            }
        }));
        recording_listener(&store, &log, "l");

        store.notify();

        // No intermediate snapshot with only one field cleared
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1], "l:None:false");
        assert!(store.get_state().destination_query.is_none());
    }

    #[test]
    fn deferred_outside_dispatch_runs_immediately() {
        let store = Store::new(DirectionsState {
            refresh: true,
            ..DirectionsState::default()
        });
        store.clear_refresh();
        assert!(!store.get_state().refresh);
    }

    #[test]
    fn snapshots_are_immutable() {
        let store = Store::new(DirectionsState::default());
        let before = store.get_state();
        store.query_origin(Some("Oslo".into()));

        assert!(before.origin_query.is_none());
        assert!(store.get_state().origin_query.is_some());
    }

    #[test]
    fn notify_runs_listeners_without_change() {
        let store = Store::new(DirectionsState::default());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(Box::new(move || counter.set(counter.get() + 1)));

        store.notify();
        store.notify();

        assert_eq!(calls.get(), 2);
        assert_eq!(store.listener_count(), 1);
    }
}
