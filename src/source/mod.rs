//! Notification source layer.
//!
//! This module provides the retrieval side of the engine:
//! - The consumed capability ([`NotificationSource`])
//! - The validated batch-size limit ([`BatchLimit`])
//! - An HTTP client seam ([`HttpClient`], [`HttpRequest`], [`HttpResponse`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The remote queue-backed source ([`RemoteSource`])
//! - Error handling ([`SourceError`], [`HttpError`])

mod client;
mod error;
mod http;
mod limit;
mod remote;

#[cfg(test)]
mod remote_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, SourceError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use limit::BatchLimit;
pub use remote::RemoteSource;

use crate::notification::{Notification, NotificationBatch};

/// Capability consumed by the polling engine: retrieve notifications
/// from a remote queue.
///
/// Both operations are asynchronous and may fail with a transport or
/// deserialization error, which the engine propagates verbatim. Retry
/// policy, if any, belongs to the implementation - a retrying wrapper
/// can implement this trait by delegation.
pub trait NotificationSource: Send + Sync {
    /// Retrieves the next single notification from the queue.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport or deserialization failure,
    /// or [`SourceError::Empty`] when the queue yields no record.
    fn fetch_one(&self)
    -> impl std::future::Future<Output = Result<Notification, SourceError>> + Send;

    /// Retrieves a batch of notifications from the queue.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum batch size; `None` lets the remote choose.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport or deserialization failure.
    /// An empty batch is not an error for this operation.
    fn fetch_batch(
        &self,
        limit: Option<BatchLimit>,
    ) -> impl std::future::Future<Output = Result<NotificationBatch, SourceError>> + Send;
}
