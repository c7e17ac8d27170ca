use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug)]
struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Repeating timer that drives an async poll task for one subject at a time.
///
/// `start` re-arms idempotently (never two live timers), the first tick
/// lands one full interval after arming, and a failing task is logged but
/// never disarms the timer. Only `stop` does.
pub struct PollingScheduler {
    interval: Duration,
    worker: Option<WorkerHandle>,
}

impl PollingScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            worker: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.worker.is_some()
    }

    pub fn start<F, Fut, E>(&mut self, task: F)
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        self.stop();

        let (stop_tx, mut stop_rx) = oneshot::channel();
        let interval = self.interval;

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval yields immediately on the first tick; consume it so
            // the first poll lands one full interval after arming
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        if let Err(err) = task().await {
                            log::warn!("poll tick failed: {err}");
                        }
                    }
                }
            }
        });

        self.worker = Some(WorkerHandle { stop_tx, join });
    }

    /// Cancels future ticks. No-op when not armed; never blocks.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            worker.join.abort();
        }
    }
}

impl Drop for PollingScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
