//! Ordered subscriber registry.

use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::subscriber::Subscriber;

/// The ordered set of subscribers for one subscription.
///
/// Insertion order equals registration order and is preserved for
/// delivery and enumeration. Identity is by reference (the allocation
/// behind the `Arc`), not by value: registering the same `Arc` twice
/// produces duplicate delivery, and removal drops the first matching
/// entry only.
///
/// All operations take `&self` and are safe to call while the polling
/// loop is running; the loop reads a consistent snapshot at each
/// delivery point.
pub struct SubscriberSet<P> {
    entries: Mutex<Vec<Arc<dyn Subscriber<P>>>>,
}

/// Address of the allocation behind an `Arc`, with any trait-object
/// metadata discarded.
fn data_ptr<T: ?Sized>(arc: &Arc<T>) -> *const () {
    Arc::as_ptr(arc).cast()
}

impl<P: 'static> SubscriberSet<P> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Appends a subscriber to the end of the registry.
    pub fn add<T: Subscriber<P>>(&self, subscriber: Arc<T>) {
        self.lock_entries().push(subscriber);
    }

    /// Removes the first entry referring to the same allocation as
    /// `subscriber`; no-op if absent.
    pub fn remove<T: Subscriber<P> + ?Sized>(&self, subscriber: &Arc<T>) {
        let target = data_ptr(subscriber);
        let mut entries = self.lock_entries();
        if let Some(position) = entries.iter().position(|e| data_ptr(e) == target) {
            entries.remove(position);
        }
    }

    /// Returns the current registry size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Returns true if no subscribers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    /// Returns the current entries in registration order.
    ///
    /// The snapshot is decoupled from the registry: concurrent
    /// registrations become visible at the next snapshot, not within
    /// an in-flight fan-out.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn Subscriber<P>>> {
        self.lock_entries().clone()
    }

    /// Returns, in registration order, every subscriber whose concrete
    /// type is `T`.
    #[must_use]
    pub fn of_kind<T: Subscriber<P>>(&self) -> Vec<Arc<T>> {
        self.lock_entries()
            .iter()
            .filter_map(|entry| {
                let cloned: Arc<dyn Subscriber<P>> = Arc::clone(entry);
                let any: Arc<dyn Any + Send + Sync> = cloned;
                any.downcast::<T>().ok()
            })
            .collect()
    }

    /// Locks the entries, recovering from a poisoned lock.
    ///
    /// Delivery happens outside the lock, so a panicking subscriber
    /// cannot leave the vector in an inconsistent state.
    fn lock_entries(&self) -> MutexGuard<'_, Vec<Arc<dyn Subscriber<P>>>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: 'static> Default for SubscriberSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static> std::fmt::Debug for SubscriberSet<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("len", &self.len())
            .finish()
    }
}
