//! Sleep abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting mock
//! sleepers in tests while using the tokio timer in production.

use std::time::Duration;

/// Abstraction over async delays for testability.
///
/// The polling loop suspends between iterations through this trait,
/// allowing tests to observe or skip delays instead of waiting on a
/// real timer.
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by the tokio timer.
///
/// Under `#[tokio::test(start_paused = true)]` the tokio timer
/// auto-advances, so this implementation is also usable in tests
/// that exercise real scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokio_sleeper_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokioSleeper>();
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_suspends_for_duration() {
        let sleeper = TokioSleeper;
        let before = tokio::time::Instant::now();

        sleeper.sleep(Duration::from_secs(30)).await;

        assert!(before.elapsed() >= Duration::from_secs(30));
    }
}
