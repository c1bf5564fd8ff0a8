//! Ordered subscriber registry.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Handle returned when a subscriber is registered.
///
/// Handles are allocated in increasing order, so ordering by handle is
/// registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Subscriber callback receiving a full snapshot.
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Stable-ordered collection of snapshot subscribers.
pub struct Listeners<T> {
    entries: BTreeMap<ListenerId, Listener<T>>,
    next_id: u64,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Debug for Listeners<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Clone> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one subscriber; it stays registered for the registry lifetime.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<T>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Box::new(listener));
        id
    }

    /// Invokes every subscriber in registration order.
    ///
    /// Each subscriber gets its own copy of `items`.
    pub fn notify(&mut self, items: &[T]) {
        for listener in self.entries.values_mut() {
            listener(items.to_vec());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns registered handles in notification order.
    pub fn ids(&self) -> Vec<ListenerId> {
        self.entries.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Listeners;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_runs_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::<u8>::new();

        for tag in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            listeners.subscribe(move |_| calls.borrow_mut().push(tag));
        }
        listeners.notify(&[1]);

        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn each_subscriber_gets_an_independent_copy() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::<u8>::new();

        listeners.subscribe(|mut items: Vec<u8>| items.clear());
        let sink = Rc::clone(&seen);
        listeners.subscribe(move |items| sink.borrow_mut().push(items));
        listeners.notify(&[1, 2, 3]);

        assert_eq!(*seen.borrow(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn ids_are_monotonic() {
        let mut listeners = Listeners::<u8>::new();
        let a = listeners.subscribe(|_| {});
        let b = listeners.subscribe(|_| {});

        assert!(a < b);
        assert_eq!(listeners.ids(), vec![a, b]);
        assert_eq!(listeners.len(), 2);
    }
}
