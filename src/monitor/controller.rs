use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::{ClientError, DataSource, SatelliteSummary, ServiceHealth, TelemetrySample};
use crate::render::RenderSink;

use super::error::{EntryError, LoadError};
use super::scheduler::PollingScheduler;
use super::view::{Subject, ViewState};
use super::window::SlidingWindow;

/// State shared with the poll task. The generation counter is bumped on
/// every view transition; a poll result whose generation no longer matches
/// is stale and must not touch the window or the sink.
#[derive(Debug)]
struct Shared {
    view: ViewState,
    window: SlidingWindow<TelemetrySample>,
    generation: u64,
}

/// Orchestrates the view state machine, the polling scheduler and the
/// telemetry window.
///
/// Invariant: the scheduler is armed iff the view is
/// [`ViewState::Monitoring`]. Entry is all-or-nothing: if either initial
/// fetch fails the view stays on the list and the scheduler is never
/// started.
pub struct TelemetrySyncController<D, R> {
    data: Arc<D>,
    sink: Arc<R>,
    history_seed_limit: u32,
    scheduler: PollingScheduler,
    shared: Arc<Mutex<Shared>>,
}

impl<D, R> TelemetrySyncController<D, R>
where
    D: DataSource + 'static,
    R: RenderSink + 'static,
{
    pub fn new(
        data: Arc<D>,
        sink: Arc<R>,
        poll_interval: Duration,
        window_capacity: usize,
        history_seed_limit: u32,
    ) -> Self {
        Self {
            data,
            sink,
            history_seed_limit,
            scheduler: PollingScheduler::new(poll_interval),
            shared: Arc::new(Mutex::new(Shared {
                view: ViewState::ListView,
                window: SlidingWindow::new(window_capacity),
                generation: 0,
            })),
        }
    }

    pub fn view(&self) -> ViewState {
        self.shared.lock().unwrap().view.clone()
    }

    pub fn is_polling(&self) -> bool {
        self.scheduler.is_armed()
    }

    pub fn window_snapshot(&self) -> Vec<TelemetrySample> {
        self.shared.lock().unwrap().window.snapshot()
    }

    /// Fetches the satellite list and renders it. On failure nothing is
    /// rendered; the caller decides how to surface the degraded state.
    pub async fn load_subject_list(&self) -> Result<Vec<SatelliteSummary>, LoadError> {
        let items = self.data.fetch_satellite_list().await?;
        self.sink.render_satellite_list(&items);
        Ok(items)
    }

    /// Switches to the monitoring view for `subject`: fetches status and
    /// seeds the window from history, then arms the scheduler.
    ///
    /// Any fetch failure aborts the entry with the view left on the list
    /// and the scheduler untouched. Selecting a new subject while already
    /// monitoring tears the previous view down first.
    pub async fn enter_monitoring(&mut self, subject: Subject) -> Result<(), EntryError> {
        if self.scheduler.is_armed() {
            self.exit_monitoring();
        }

        let status = match self.data.fetch_satellite_status(subject.id).await {
            Ok(status) => status,
            Err(err) => {
                log::error!("status fetch for satellite {} failed: {err}", subject.id);
                return Err(EntryError::Status(err));
            }
        };

        let mut history = match self
            .data
            .fetch_telemetry_history(subject.id, self.history_seed_limit)
            .await
        {
            Ok(history) => history,
            Err(err) => {
                log::error!("history fetch for satellite {} failed: {err}", subject.id);
                return Err(EntryError::Telemetry(err));
            }
        };

        // The service reports newest-first; the window wants chronological
        // order and keeps the most recent capacity-many samples.
        history.sort_by_key(|sample| sample.timestamp);

        let subject_id = subject.id;
        let (generation, snapshot) = {
            let mut shared = self.shared.lock().unwrap();
            shared.generation += 1;
            shared.view = ViewState::Monitoring { subject };
            shared.window.seed(history);
            (shared.generation, shared.window.snapshot())
        };

        self.sink.render_status_panel(&status);
        if let Some(latest) = snapshot.last() {
            self.sink.render_current_readings(latest);
        }
        self.sink.render_series(&snapshot);

        let data = Arc::clone(&self.data);
        let sink = Arc::clone(&self.sink);
        let shared = Arc::clone(&self.shared);
        self.scheduler.start(move || {
            poll_once(
                Arc::clone(&data),
                Arc::clone(&sink),
                Arc::clone(&shared),
                generation,
                subject_id,
            )
        });

        Ok(())
    }

    /// Returns to the list view: disarms the scheduler, signals the sink
    /// to tear down its monitoring surfaces, then discards subject and
    /// window. Best-effort; never touches the network.
    pub fn exit_monitoring(&mut self) {
        self.scheduler.stop();
        if !self.shared.lock().unwrap().view.is_monitoring() {
            return;
        }
        self.sink.teardown_monitoring_view();

        let mut shared = self.shared.lock().unwrap();
        shared.generation += 1;
        shared.window.clear();
        shared.view = ViewState::ListView;
    }

    /// Probes both services independently and renders the result. A failed
    /// probe marks that service down; this never errors.
    pub async fn check_health(&self) -> ServiceHealth {
        let health = ServiceHealth {
            status_service_up: self.data.status_service_ok().await,
            telemetry_service_up: self.data.telemetry_service_ok().await,
        };
        self.sink.render_service_health(&health);
        health
    }
}

/// One poll cycle: fetch the latest sample, then apply it under the lock
/// only if the originating view generation is still current. Window
/// mutation happens before the render calls; a failed fetch leaves the
/// window untouched and surfaces a transient error instead.
async fn poll_once<D, R>(
    data: Arc<D>,
    sink: Arc<R>,
    shared: Arc<Mutex<Shared>>,
    generation: u64,
    subject_id: u32,
) -> Result<(), ClientError>
where
    D: DataSource,
    R: RenderSink,
{
    let result = data.fetch_latest_telemetry(subject_id).await;

    let snapshot = {
        let mut locked = shared.lock().unwrap();
        if locked.generation != generation {
            log::debug!("discarding stale poll result for satellite {subject_id}");
            return Ok(());
        }
        match result {
            Ok(sample) => {
                locked.window.push(sample);
                locked.window.snapshot()
            }
            Err(err) => {
                drop(locked);
                sink.render_transient_error(&format!("telemetry update failed: {err}"));
                return Err(err);
            }
        }
    };

    if let Some(latest) = snapshot.last() {
        sink.render_current_readings(latest);
    }
    sink.render_series(&snapshot);
    Ok(())
}
