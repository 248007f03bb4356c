//! Ordered listener registries.
//!
//! Each event kind keeps its own `ListenerSet`: an append-ordered
//! collection of callbacks, each identified by a `ListenerId` handle.
//! Invocation order for a single event is exactly registration order, and
//! removal is by handle, so dispatch never depends on enumeration tricks
//! or callback identity.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Handle identifying a registered listener.
///
/// Handles are unique per `ListenerSet` for the lifetime of the set,
/// including across clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a listener ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

struct ListenerEntry<E> {
    id: ListenerId,
    callback: Box<dyn FnMut(&E)>,
}

/// An ordered collection of callbacks for one event kind.
///
/// Most sets hold a handful of listeners; the inline capacity avoids heap
/// allocation for the common case.
pub struct ListenerSet<E> {
    entries: SmallVec<[ListenerEntry<E>; 4]>,
    next_id: u32,
}

impl<E> ListenerSet<E> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Append a listener, returning its removal handle.
    pub fn add(&mut self, callback: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(ListenerEntry {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a listener by handle. Returns whether it was present.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Invoke every listener once, in registration order.
    pub fn emit(&mut self, event: &E) {
        for entry in self.entries.iter_mut() {
            (entry.callback)(event);
        }
    }

    /// Drop all listeners. Handles already issued stay retired.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for ListenerSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for ListenerSet<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.entries.len())
            .finish()
    }
}
