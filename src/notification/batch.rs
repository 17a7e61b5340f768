//! Ordered batches of notifications.

use serde::{Deserialize, Serialize};

use super::Notification;

/// An ordered sequence of notifications from one poll.
///
/// Insertion order equals the delivery order returned by the source.
/// Batch subscribers receive the whole batch at once and iterate it
/// themselves when they need per-record handling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationBatch(Vec<Notification>);

impl NotificationBatch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of notifications in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the batch contains no notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the notifications as a slice, in delivery order.
    #[must_use]
    pub fn as_slice(&self) -> &[Notification] {
        &self.0
    }

    /// Iterates the notifications in delivery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.0.iter()
    }

    /// Consumes the batch and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Notification> {
        self.0
    }
}

impl From<Vec<Notification>> for NotificationBatch {
    fn from(notifications: Vec<Notification>) -> Self {
        Self(notifications)
    }
}

impl FromIterator<Notification> for NotificationBatch {
    fn from_iter<I: IntoIterator<Item = Notification>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for NotificationBatch {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationBatch {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
