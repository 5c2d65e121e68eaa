// RefreshScheduler: periodically regenerates the newsletter held by the store.
// The startup edition comes from store construction; the first tick fires one interval later.

use crate::store::NewsletterStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info};

pub struct RefreshScheduler {
    store: Arc<NewsletterStore>,
    interval: Duration,
}

impl RefreshScheduler {
    #[must_use]
    pub fn new(store: Arc<NewsletterStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Spawn the refresh loop as its own task, inside the caller's span.
    ///
    /// Returns a `JoinHandle` that resolves once `cancel_token` is cancelled.
    #[must_use]
    pub fn spawn(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel_token).in_current_span())
    }

    async fn run(self, cancel_token: CancellationToken) {
        info!(interval = ?self.interval, "RefreshScheduler started");

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = cancel_token.cancelled() => {
                    info!("RefreshScheduler received shutdown signal, stopping");
                    break;
                }
                _ = ticker.tick() => {
                    self.store.refresh();
                }
            }
        }

        info!("RefreshScheduler shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedPick;

    #[tokio::test]
    async fn test_scheduler_refreshes_periodically() {
        let store = Arc::new(NewsletterStore::new(FixedPick::first()));
        let cancel_token = CancellationToken::new();

        let handle =
            RefreshScheduler::new(store.clone(), Duration::from_millis(20)).spawn(cancel_token.clone());

        tokio::time::sleep(Duration::from_millis(150)).await;
        cancel_token.cancel();
        let _ = tokio::time::timeout(Duration::from_secs(1), handle).await;

        assert!(
            store.current().generation >= 2,
            "Scheduler should have refreshed several times"
        );
    }

    #[tokio::test]
    async fn test_scheduler_waits_one_interval_before_first_refresh() {
        let store = Arc::new(NewsletterStore::new(FixedPick::first()));
        let cancel_token = CancellationToken::new();

        let handle =
            RefreshScheduler::new(store.clone(), Duration::from_secs(30)).spawn(cancel_token.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(store.current().generation, 0);

        cancel_token.cancel();
        let _ = tokio::time::timeout(Duration::from_secs(1), handle).await;
    }

    #[tokio::test]
    async fn test_scheduler_shutdown_signal() {
        let store = Arc::new(NewsletterStore::new(FixedPick::first()));
        let cancel_token = CancellationToken::new();

        let handle = RefreshScheduler::new(store, Duration::from_millis(100)).spawn(cancel_token.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel_token.cancel();

        let result = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(result.is_ok(), "RefreshScheduler should shutdown gracefully");
    }

    #[tokio::test]
    async fn test_scheduler_stops_refreshing_after_cancel() {
        let store = Arc::new(NewsletterStore::new(FixedPick::first()));
        let cancel_token = CancellationToken::new();

        let handle =
            RefreshScheduler::new(store.clone(), Duration::from_millis(20)).spawn(cancel_token.clone());

        tokio::time::sleep(Duration::from_millis(60)).await;
        cancel_token.cancel();
        let _ = tokio::time::timeout(Duration::from_secs(1), handle).await;

        let stopped_at = store.current().generation;
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(store.current().generation, stopped_at);
    }
}
