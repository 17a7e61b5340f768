//! Notification data model.
//!
//! This module provides the types delivered by the polling engine:
//! - A single change-notification record ([`Notification`])
//! - The ordered per-poll batch ([`NotificationBatch`])
//! - Record metadata ([`OperationKind`], [`Publisher`], [`ResourceRef`])

mod batch;
mod record;


pub use batch::NotificationBatch;
pub use record::{Notification, OperationKind, Publisher, ResourceRef};
