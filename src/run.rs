//! Application execution logic.
//!
//! This module wires the validated configuration into a polling
//! service, fans notifications out to the logging subscriber, and
//! drives the loop until a shutdown signal arrives.

use std::sync::Arc;

use http::HeaderValue;
use http::header::ACCEPT;
use thiserror::Error;
use tokio::signal;

use notipoll::config::{PollMode, ValidatedConfig};
use notipoll::notification::{Notification, NotificationBatch};
use notipoll::poll::{
    BatchPollService, PollError, PollPayload, PollService, SinglePollService, Subscriber,
    SubscriberError,
};
use notipoll::source::{HttpError, NotificationSource, RemoteSource, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] HttpError),

    /// Invalid polling configuration (interval or limit).
    #[error("Invalid polling configuration: {0}")]
    Setup(#[source] PollError),

    /// The polling loop terminated with a fault.
    #[error("Polling failed: {0}")]
    Polling(#[source] PollError),

    /// The polling task panicked.
    #[error("Polling task panicked")]
    TaskPanicked,
}

/// Subscriber that logs every delivered notification.
pub struct LogSubscriber;

impl LogSubscriber {
    fn log_record(notification: &Notification) {
        tracing::info!(
            id = %notification.id,
            operation = %notification.operation,
            resource = %notification.resource.kind,
            resource_id = %notification.resource.id,
            published = %notification.published,
            "Notification received"
        );
    }
}

impl Subscriber<Notification> for LogSubscriber {
    fn receive(&self, payload: &Notification) -> Result<(), SubscriberError> {
        Self::log_record(payload);
        Ok(())
    }
}

impl Subscriber<NotificationBatch> for LogSubscriber {
    fn receive(&self, payload: &NotificationBatch) -> Result<(), SubscriberError> {
        if payload.is_empty() {
            tracing::debug!("Empty batch received");
            return Ok(());
        }

        tracing::info!("Batch of {} notification(s) received", payload.len());
        for notification in payload {
            Self::log_record(notification);
        }

        Ok(())
    }
}

/// Builds the remote source from validated configuration.
fn build_source(config: &ValidatedConfig) -> Result<RemoteSource<ReqwestClient>, RunError> {
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::HttpClient)?;

    // Config headers replace the source defaults; keep Accept unless
    // the user overrode it.
    let mut headers = config.headers.clone();
    headers
        .entry(ACCEPT)
        .or_insert(HeaderValue::from_static("application/json"));

    Ok(RemoteSource::new(client, config.url.clone()).with_headers(headers))
}

/// Executes the main application loop.
///
/// This function:
/// 1. Builds the HTTP client and remote notification source
/// 2. Constructs the polling service for the configured payload shape
/// 3. Registers the logging subscriber
/// 4. Polls until a shutdown signal (Ctrl+C / SIGTERM) arrives
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The polling configuration is rejected (interval or limit)
/// - The polling loop terminates with a fault
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires a real
/// async runtime with signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let source = build_source(&config)?;

    match config.mode {
        PollMode::Single => {
            let service = SinglePollService::new(source, config.interval, config.limit)
                .map_err(RunError::Setup)?;
            service.add_subscriber(Arc::new(LogSubscriber));
            tracing::info!(
                "Polling one notification every {}s",
                config.interval.as_secs()
            );
            run_service(Arc::new(service)).await
        }
        PollMode::Batch => {
            let service = BatchPollService::new(source, config.interval, config.limit)
                .map_err(RunError::Setup)?;
            service.add_subscriber(Arc::new(LogSubscriber));
            tracing::info!(
                "Polling notification batches every {}s",
                config.interval.as_secs()
            );
            run_service(Arc::new(service)).await
        }
    }
}

/// Drives one polling service until shutdown or fault.
///
/// Cancellation is cooperative: after the shutdown signal the loop is
/// cancelled and awaited, so an in-flight iteration finishes cleanly
/// before the function returns.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn run_service<S, P>(service: Arc<PollService<S, P>>) -> Result<(), RunError>
where
    S: NotificationSource + 'static,
    P: PollPayload,
{
    let poller = Arc::clone(&service);
    let mut handle = tokio::spawn(async move { poller.start_polling().await });

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    tokio::select! {
        biased;

        () = &mut shutdown => {
            tracing::info!("Shutdown signal received, stopping...");
            service.subscription().cancel();
            join_polling(handle).await
        }

        joined = &mut handle => {
            match joined {
                Ok(result) => result.map_err(RunError::Polling),
                Err(_) => Err(RunError::TaskPanicked),
            }
        }
    }
}

/// Awaits the polling task after cancellation.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn join_polling(
    handle: tokio::task::JoinHandle<Result<(), PollError>>,
) -> Result<(), RunError> {
    match handle.await {
        Ok(result) => result.map_err(RunError::Polling),
        Err(_) => Err(RunError::TaskPanicked),
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
