//! The pointer document: the single event target that pointer-down
//! listeners register against.
//!
//! Listeners are called in registration order. A dispatch only reaches
//! listeners that were registered when it started; listeners removed during
//! a dispatch are not called afterwards.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::input::PointerDownEvent;

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// What a listener wants after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerAction {
    /// Stay registered.
    Keep,
    /// Deregister now.
    Remove,
}

type Listener = Box<dyn FnMut(&PointerDownEvent) -> ListenerAction>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    // `None` while the listener is being called.
    listeners: Vec<(ListenerId, Option<Listener>)>,
}

impl Registry {
    fn position(&self, id: ListenerId) -> Option<usize> {
        self.listeners.iter().position(|(lid, _)| *lid == id)
    }
}

/// Shared handle to the pointer document. Clones refer to the same document.
#[derive(Clone, Default)]
pub struct PointerDocument {
    registry: Rc<RefCell<Registry>>,
}

impl PointerDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pointer-down listener.
    pub fn add_listener(
        &self,
        listener: impl FnMut(&PointerDownEvent) -> ListenerAction + 'static,
    ) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Some(Box::new(listener))));
        log::trace!("pointer listener {:?} added", id);
        id
    }

    /// Deregister a listener. Returns false if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let removed = {
            let mut registry = self.registry.borrow_mut();
            registry
                .position(id)
                .map(|index| registry.listeners.remove(index))
        };
        // Dropped outside the borrow: a listener's captures may hold
        // subscriptions to this document.
        match removed {
            Some(_) => {
                log::trace!("pointer listener {:?} removed", id);
                true
            }
            None => false,
        }
    }

    /// Check if a listener is registered.
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.registry.borrow().position(id).is_some()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Deliver a pointer-down to every listener registered right now.
    pub fn dispatch(&self, event: &PointerDownEvent) {
        let ids: Vec<ListenerId> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, _)| *id)
            .collect();

        for id in ids {
            let taken = {
                let mut registry = self.registry.borrow_mut();
                registry
                    .position(id)
                    .and_then(|index| registry.listeners[index].1.take())
            };
            let Some(mut listener) = taken else {
                continue;
            };

            let action = listener(event);

            let mut registry = self.registry.borrow_mut();
            match (registry.position(id), action) {
                (Some(index), ListenerAction::Keep) => registry.listeners[index].1 = Some(listener),
                (Some(index), ListenerAction::Remove) => {
                    registry.listeners.remove(index);
                    log::trace!("pointer listener {:?} removed itself", id);
                }
                // Removed while running
                (None, _) => {}
            }
        }
    }
}

impl fmt::Debug for PointerDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerDocument")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_listeners_in_order() {
        let doc = PointerDocument::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = Rc::clone(&log);
        doc.add_listener(move |_| {
            l1.borrow_mut().push(1);
            ListenerAction::Keep
        });
        let l2 = Rc::clone(&log);
        doc.add_listener(move |_| {
            l2.borrow_mut().push(2);
            ListenerAction::Keep
        });

        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));
        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));

        assert_eq!(*log.borrow(), vec![1, 2, 1, 2]);
        assert_eq!(doc.listener_count(), 2);
    }

    #[test]
    fn test_remove_listener() {
        let doc = PointerDocument::new();
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let id = doc.add_listener(move |_| {
            c.set(c.get() + 1);
            ListenerAction::Keep
        });

        assert!(doc.has_listener(id));
        assert!(doc.remove_listener(id));
        assert!(!doc.remove_listener(id));
        assert!(!doc.has_listener(id));

        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_listener_can_remove_itself() {
        let doc = PointerDocument::new();
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        doc.add_listener(move |_| {
            c.set(c.get() + 1);
            ListenerAction::Remove
        });

        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));
        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));

        assert_eq!(calls.get(), 1);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_listener_removed_during_dispatch_is_skipped() {
        let doc = PointerDocument::new();
        let second_calls = Rc::new(Cell::new(0));
        let second_id = Rc::new(Cell::new(None));

        let handle = doc.clone();
        let target = Rc::clone(&second_id);
        doc.add_listener(move |_| {
            if let Some(id) = target.get() {
                handle.remove_listener(id);
            }
            ListenerAction::Keep
        });
        let c = Rc::clone(&second_calls);
        let id = doc.add_listener(move |_| {
            c.set(c.get() + 1);
            ListenerAction::Keep
        });
        second_id.set(Some(id));

        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));
        assert_eq!(second_calls.get(), 0);
        assert_eq!(doc.listener_count(), 1);
    }

    #[test]
    fn test_listener_added_during_dispatch_waits_for_next_event() {
        let doc = PointerDocument::new();
        let late_calls = Rc::new(Cell::new(0));

        let handle = doc.clone();
        let c = Rc::clone(&late_calls);
        doc.add_listener(move |_| {
            let c = Rc::clone(&c);
            handle.add_listener(move |_| {
                c.set(c.get() + 1);
                ListenerAction::Remove
            });
            ListenerAction::Remove
        });

        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));
        assert_eq!(late_calls.get(), 0);
        assert_eq!(doc.listener_count(), 1);

        doc.dispatch(&PointerDownEvent::primary(0.0, 0.0));
        assert_eq!(late_calls.get(), 1);
        assert_eq!(doc.listener_count(), 0);
    }
}
