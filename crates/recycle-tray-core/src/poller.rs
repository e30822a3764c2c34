//! Periodic recycle bin status polling.
//!
//! Queries run on the blocking pool so the UI thread never waits on the
//! shell. At most one query is outstanding at any time: ticks that arrive
//! while a query is still running are dropped, never queued.

use crate::{
    CoreResult, TrayError,
    controller::RefreshHandle,
    shell::{BinStatus, RecycleBin},
};

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{Notify, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info, instrument, warn};

/// Time between scheduled polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Longest a single status query may take before it counts as failed.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Polls the shell on a fixed interval and publishes each result.
pub struct StatusPoller {
    shell: Arc<dyn RecycleBin>,
    interval: Duration,
    query_timeout: Duration,
    wake: Arc<Notify>,
}

impl StatusPoller {
    /// Poller with the default interval and timeout.
    pub fn new(shell: Arc<dyn RecycleBin>) -> Self {
        Self::with_timing(shell, POLL_INTERVAL, QUERY_TIMEOUT)
    }

    /// Poller with explicit timing.
    pub fn with_timing(
        shell: Arc<dyn RecycleBin>,
        interval: Duration,
        query_timeout: Duration,
    ) -> Self {
        Self {
            shell,
            interval,
            query_timeout,
            wake: Arc::new(Notify::new()),
        }
    }

    /// Handle that triggers an immediate extra poll.
    pub fn refresh_handle(&self) -> PollerRefresh {
        PollerRefresh {
            wake: Arc::clone(&self.wake),
        }
    }

    /// Poll until shutdown is signalled or `publish` returns `false`.
    ///
    /// The first poll happens immediately.
    #[instrument(skip_all)]
    pub async fn run<F>(self, mut shutdown_rx: watch::Receiver<bool>, mut publish: F)
    where
        F: FnMut(CoreResult<BinStatus>) -> bool,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // A query that outlived its timeout; blocks new queries until it ends.
        let mut stalled: Option<JoinHandle<CoreResult<BinStatus>>> = None;

        info!("Status poller started");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Status poller shutting down");
                    break;
                }
                _ = ticker.tick() => {}
                _ = self.wake.notified() => {
                    debug!("Refresh requested");
                }
            }

            if let Some(handle) = &stalled {
                if !handle.is_finished() {
                    debug!("Previous query still running, skipping tick");
                    continue;
                }
                stalled = None;
            }

            let shell = Arc::clone(&self.shell);
            let mut handle = tokio::task::spawn_blocking(move || shell.query_status());

            let result = match tokio::time::timeout(self.query_timeout, &mut handle).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => {
                    warn!(error = ?e, "Status query task failed");
                    Err(TrayError::query_failed(None))
                }
                Err(_) => {
                    warn!(
                        timeout_ms = self.query_timeout.as_millis(),
                        "Status query timed out"
                    );
                    stalled = Some(handle);
                    Err(TrayError::query_failed(None))
                }
            };

            if !publish(result) {
                info!("Status receiver gone, stopping poller");
                break;
            }
        }
    }
}

/// [`RefreshHandle`] that wakes a [`StatusPoller`].
#[derive(Debug, Clone)]
pub struct PollerRefresh {
    wake: Arc<Notify>,
}

impl RefreshHandle for PollerRefresh {
    fn request(&self) {
        // notify_one stores a single permit, so bursts collapse into one poll.
        self.wake.notify_one();
    }
}
