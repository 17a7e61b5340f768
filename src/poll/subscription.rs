//! The fetch/deliver/wait polling loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::source::{BatchLimit, NotificationSource};
use crate::time::{Sleeper, TokioSleeper};

use super::error::PollError;
use super::payload::PollPayload;
use super::registry::SubscriberSet;

/// Owner of the polling loop for one payload shape.
///
/// Drives fetch -> fan-out -> cancellation check -> delay, repeating
/// until cancelled or faulted. Usually constructed through
/// [`PollService`](super::PollService); exposed so callers can flip
/// the cancellation flag while the loop runs.
///
/// # Cancellation
///
/// Cancellation is cooperative: [`Subscription::cancel`] sets an
/// atomic flag that the loop observes at one checkpoint per iteration,
/// after delivery and before the delay. It therefore takes effect
/// within at most one full fetch/deliver/delay cycle and never
/// interrupts an in-flight fetch or delivery. Once set, the engine
/// never clears the flag.
///
/// # Type Parameters
///
/// * `S` - The [`NotificationSource`] fetched from
/// * `P` - The payload shape ([`PollPayload`])
/// * `D` - The sleeper used for the inter-iteration delay (defaults
///   to [`TokioSleeper`])
pub struct Subscription<S, P, D = TokioSleeper> {
    source: S,
    interval: Duration,
    limit: Option<BatchLimit>,
    cancelled: AtomicBool,
    subscribers: SubscriberSet<P>,
    sleeper: D,
}

impl<S, P> Subscription<S, P, TokioSleeper>
where
    S: NotificationSource,
    P: PollPayload,
{
    /// Creates an inert subscription with an empty registry.
    ///
    /// The interval is fixed for the subscription's lifetime.
    pub(crate) fn new(
        source: S,
        interval: Duration,
        limit: Option<BatchLimit>,
    ) -> Result<Self, PollError> {
        if interval.is_zero() {
            return Err(PollError::ZeroInterval);
        }

        Ok(Self {
            source,
            interval,
            limit,
            cancelled: AtomicBool::new(false),
            subscribers: SubscriberSet::new(),
            sleeper: TokioSleeper,
        })
    }
}

impl<S, P: PollPayload, D> Subscription<S, P, D> {
    /// Replaces the sleeper used for inter-iteration delays.
    ///
    /// Primarily useful for testing.
    #[must_use]
    pub fn with_sleeper<D2: Sleeper>(self, sleeper: D2) -> Subscription<S, P, D2> {
        Subscription {
            source: self.source,
            interval: self.interval,
            limit: self.limit,
            cancelled: self.cancelled,
            subscribers: self.subscribers,
            sleeper,
        }
    }

    /// Returns the configured polling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the configured batch limit, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<BatchLimit> {
        self.limit
    }

    /// Requests cooperative cancellation of the polling loop.
    ///
    /// Safe to call from any task at any time, including before the
    /// loop starts. Idempotent; the flag is never cleared.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        tracing::debug!("Cancellation requested");
    }

    /// Returns true if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// The live subscriber registry this subscription fans out to.
    pub(crate) const fn subscribers(&self) -> &SubscriberSet<P> {
        &self.subscribers
    }
}

impl<S, P, D> Subscription<S, P, D>
where
    S: NotificationSource,
    P: PollPayload,
    D: Sleeper,
{
    /// Runs the polling loop until cancelled or faulted.
    ///
    /// Each iteration fetches one payload (skipped while the registry
    /// is empty - nothing is fetched with nobody to deliver to),
    /// delivers it to every registered subscriber in registration
    /// order, observes the cancellation flag, and suspends for the
    /// configured interval.
    ///
    /// Clean cancellation and faulted termination share the same
    /// shutdown path; they differ only in whether an error is
    /// returned. Iterations are strictly sequential: the next fetch
    /// never starts before the previous delivery and cancellation
    /// check complete.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Fetch`] when the source fails and
    /// [`PollError::Subscriber`] when a subscriber rejects delivery.
    /// Either fault stops the loop; no further iterations occur.
    pub async fn run(&self) -> Result<(), PollError> {
        tracing::info!(
            shape = P::SHAPE,
            interval_secs = self.interval.as_secs(),
            "Polling started"
        );

        loop {
            if let Err(error) = self.poll_once().await {
                tracing::error!("Polling faulted: {error}");
                return Err(error);
            }

            if self.is_cancelled() {
                tracing::info!("Cancellation observed, polling stopped");
                return Ok(());
            }

            self.sleeper.sleep(self.interval).await;
        }
    }

    /// Executes one fetch + fan-out iteration.
    async fn poll_once(&self) -> Result<(), PollError> {
        if self.subscribers.is_empty() {
            tracing::trace!("No subscribers registered, skipping fetch");
            return Ok(());
        }

        let payload = P::fetch(&self.source, self.limit)
            .await
            .map_err(PollError::Fetch)?;

        // Snapshot at the moment of fan-out: registrations during this
        // delivery become visible on the next iteration.
        let recipients = self.subscribers.snapshot();
        tracing::debug!(
            records = payload.record_count(),
            subscribers = recipients.len(),
            "Delivering payload"
        );

        for subscriber in recipients {
            subscriber.receive(&payload).map_err(PollError::Subscriber)?;
        }

        Ok(())
    }
}
