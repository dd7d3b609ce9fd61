//! Observable view-state container.
//!
//! A [`Store`] owns one screen's view state. Every mutation goes through
//! [`Store::set_state`], which notifies all subscribers with the new state.
//! The TUI shell subscribes a [`RedrawFlag`] so that a state change schedules
//! a render pass.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// State container with change notification.
pub struct Store<S> {
    state: S,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_id: u64,
}

impl<S> Store<S> {
    /// Wrap an initial state. No listeners are registered.
    pub fn new(state: S) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Register a listener called after every `set_state`.
    pub fn subscribe(&mut self, listener: impl FnMut(&S) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Apply a partial update, then notify every listener.
    ///
    /// Returns whatever the update closure returns.
    pub fn set_state<R>(&mut self, update: impl FnOnce(&mut S) -> R) -> R {
        let result = update(&mut self.state);
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
        result
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Shared "needs redraw" bit raised by store listeners.
///
/// Single-threaded: lives on the UI thread with the stores.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl RedrawFlag {
    /// New flag, initially lowered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a redraw.
    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Read and lower the flag.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }

    /// Whether a redraw is pending, without lowering the flag.
    pub fn is_raised(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct Counter {
        value: u32,
        label: String,
    }

    #[test]
    fn set_state_applies_partial_update() {
        let mut store = Store::new(Counter {
            value: 1,
            label: "keep".to_string(),
        });

        store.set_state(|s| s.value = 2);

        assert_eq!(store.state().value, 2);
        assert_eq!(store.state().label, "keep");
    }

    #[test]
    fn listeners_see_new_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(Counter::default());
        let sink = Rc::clone(&seen);
        store.subscribe(move |s: &Counter| sink.borrow_mut().push(s.value));

        store.set_state(|s| s.value = 5);
        store.set_state(|s| s.value += 1);

        assert_eq!(*seen.borrow(), vec![5, 6]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let calls = Rc::new(Cell::new(0));
        let mut store = Store::new(Counter::default());
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_state(|s| s.value = 1);

        assert_eq!(calls.get(), 0);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn set_state_returns_closure_result() {
        let mut store = Store::new(Counter::default());
        let previous = store.set_state(|s| std::mem::replace(&mut s.value, 9));
        assert_eq!(previous, 0);
        assert_eq!(store.state().value, 9);
    }

    #[test]
    fn redraw_flag_raised_by_listener() {
        let flag = RedrawFlag::new();
        let mut store = Store::new(Counter::default());
        let listener_flag = flag.clone();
        store.subscribe(move |_| listener_flag.raise());

        assert!(!flag.take());
        store.set_state(|s| s.value = 3);
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!flag.take(), "take() lowers the flag");
    }
}
