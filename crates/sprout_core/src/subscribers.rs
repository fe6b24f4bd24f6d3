//! Change subscribers
//!
//! A small observer registry. Listeners are boxed closures keyed by a
//! [`SubscriptionId`]; publishing an event calls every live listener once.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Subscribers::subscribe`]
    pub struct SubscriptionId;
}

/// Boxed listener callback
pub type Listener<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Registry of listeners for events of type `E`
pub struct Subscribers<E> {
    listeners: SlotMap<SubscriptionId, Listener<E>>,
}

impl<E> Subscribers<E> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = self.listeners.insert(Box::new(listener));
        tracing::trace!(?id, total = self.listeners.len(), "listener subscribed");
        id
    }

    /// Remove a listener. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.listeners.remove(id).is_some();
        tracing::trace!(?id, removed, "listener unsubscribed");
        removed
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.listeners.contains_key(id)
    }

    /// Call every listener with `event`. Returns how many were called.
    pub fn notify(&self, event: &E) -> usize {
        for (_, listener) in self.listeners.iter() {
            listener(event);
        }
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
