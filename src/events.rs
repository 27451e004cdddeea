//! Synchronous change notifications
//!
//! Every mutable entity of the core (buffer, position, range, tokenizer) owns
//! one [`EventChannel`] per kind of event it publishes. Listeners run in
//! registration order, after the owner has committed its state change.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle returned by [`EventChannel::subscribe`], used to unsubscribe.
/// Unique across all channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

type Listener<E> = Box<dyn FnMut(&E)>;

/// An ordered list of listeners for one event type.
pub struct EventChannel<E> {
    listeners: Vec<(ListenerId, Listener<E>)>,
}

impl<E> EventChannel<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener; it is called for every subsequent event
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        let id = ListenerId::next();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener in registration order
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventChannel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut channel: EventChannel<u32> = EventChannel::new();

        let first = Rc::clone(&log);
        channel.subscribe(move |e| first.borrow_mut().push(("first", *e)));
        let second = Rc::clone(&log);
        channel.subscribe(move |e| second.borrow_mut().push(("second", *e)));

        channel.emit(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut channel: EventChannel<()> = EventChannel::new();

        let counter = Rc::clone(&count);
        let id = channel.subscribe(move |_| *counter.borrow_mut() += 1);
        channel.emit(&());
        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        channel.emit(&());

        assert_eq!(*count.borrow(), 1);
        assert!(channel.is_empty());
    }
}
