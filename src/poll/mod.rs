//! Polling engine for change-notification subscriptions.
//!
//! This module turns a point-in-time "fetch N notifications" source
//! into a long-running, cancellable, observer-driven stream:
//! - Listener capability and failure type ([`Subscriber`], [`SubscriberError`])
//! - Ordered, type-filterable listener registry ([`SubscriberSet`])
//! - Payload-shape selection ([`PollPayload`])
//! - The fetch/deliver/wait loop ([`Subscription`])
//! - Application-facing façade ([`PollService`])
//! - Error handling ([`PollError`])

mod error;
mod payload;
mod registry;
mod service;
mod subscriber;
mod subscription;


pub use error::PollError;
pub use payload::PollPayload;
pub use registry::SubscriberSet;
pub use service::{BatchPollService, PollService, SinglePollService};
pub use subscriber::{Subscriber, SubscriberError};
pub use subscription::Subscription;
