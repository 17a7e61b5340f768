//! notipoll: Change Notification Polling Client
//!
//! A library for subscribing to remote change notifications by polling
//! a queue-backed endpoint and fanning out each payload to registered
//! subscribers.

pub mod config;
pub mod notification;
pub mod poll;
pub mod source;
pub mod time;
