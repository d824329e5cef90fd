//! Ticker worker

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::TimeTracker;

/// Background loop that advances the shared tracker once per interval
pub struct Ticker {
    tracker: Arc<TimeTracker>,
    interval: Duration,
}

impl Ticker {
    pub fn new(tracker: Arc<TimeTracker>, interval: Duration) -> Self {
        Self { tracker, interval }
    }

    /// Run until the shutdown flag flips to true or its sender is dropped.
    /// The first advance happens one full interval after startup.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // interval yields immediately the first time; consume that
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => self.tracker.tick(),
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("ticker stopping");
                        break;
                    }
                }
            }
        }
    }
}
