use crate::dashboard::Dashboard;
use core::time::Duration;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

const LOG_TARGET: &str = " scheduler";

/// Background task that clears every cached record once per period.
///
/// Clearing does not refetch; the next lookup of a project repopulates it. The task stops when the scheduler is
/// dropped.
#[derive(Debug)]
pub struct RefreshScheduler {
    handle: JoinHandle<()>,
    period: Duration,
}

impl RefreshScheduler {
    /// Start clearing `dashboard` every `period`, the first time one full period from now.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn start(dashboard: Arc<Dashboard>, period: Duration) -> Self {
        assert!(!period.is_zero(), "refresh period must be non-zero");

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                let _ = interval.tick().await;
                log::info!(target: LOG_TARGET, "Resetting projects' cache");
                dashboard.clear_all().await;
            }
        });

        log::debug!(target: LOG_TARGET, "Refreshing every {}s", period.as_secs());
        Self { handle, period }
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Stop the background task.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
