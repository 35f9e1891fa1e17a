//! Dashboard view state: feed contents, connectivity flag, diagnostic log.
//!
//! All state lives behind `&mut self`, so loads serialize and a
//! superseded call can never interleave a partial payload; whichever
//! response resolves last owns the view. Per triggering action the
//! surface moves `Idle → Loading → {Success | Failure} → Idle` and
//! nothing else.

use std::time::Duration;

use regwatch_core::{DiagnosticLog, Regulation, ScrapeJob, ScrapeRequest, filter_by_title};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api::ApiClient;

/// Opt-in best-effort feed re-polling after a scrape job is created.
///
/// The backend gives no completion signal, so `attempts` is an upper
/// bound, not a guarantee that the reloaded feed reflects the job.
#[derive(Debug, Clone, Copy)]
pub struct RefreshSchedule {
    pub delay: Duration,
    pub attempts: u32,
}

impl RefreshSchedule {
    /// One reload five seconds after job creation, matching the delay
    /// the backend suggests for small scrapes.
    pub const DEFAULT: Self = Self {
        delay: Duration::from_secs(5),
        attempts: 1,
    };
}

/// The single owner of all dashboard view state.
///
/// Failures never propagate past this surface: they land in the
/// diagnostic log and the previously fetched feed stays visible.
pub struct Dashboard {
    api: ApiClient,
    regulations: Vec<Regulation>,
    loading: bool,
    connected: bool,
    last_job: Option<ScrapeJob>,
    log: DiagnosticLog,
    cancel: CancellationToken,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            regulations: Vec::new(),
            loading: false,
            connected: false,
            last_job: None,
            log: DiagnosticLog::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Reload the feed, replacing the collection entirely on success.
    ///
    /// On failure the stale collection is kept and exactly one failure
    /// entry is logged. The loading flag is cleared on every exit path.
    /// Returns whether the reload succeeded.
    pub async fn refresh(&mut self) -> bool {
        self.loading = true;
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = self.api.list_regulations() => Some(result),
        };
        self.loading = false;

        match outcome {
            None => {
                debug!("load cancelled, view state untouched");
                false
            }
            Some(Ok(records)) => {
                self.connected = true;
                self.log.success(format!("loaded {} regulations", records.len()));
                self.regulations = records;
                true
            }
            Some(Err(err)) => {
                self.connected = false;
                self.log.failure(format!("load failed: {err}"));
                false
            }
        }
    }

    /// Start a scrape job, logging the outcome either way.
    ///
    /// `schedule` opts into best-effort re-polling of the feed after
    /// the job is created; `None` leaves the feed untouched until the
    /// caller refreshes manually. Returns the job on success.
    pub async fn start_scrape(
        &mut self,
        req: &ScrapeRequest,
        schedule: Option<RefreshSchedule>,
    ) -> Option<ScrapeJob> {
        self.loading = true;
        let result = self.api.start_scrape(req).await;
        self.loading = false;

        let job = match result {
            Ok(job) => {
                self.log.success(format!("scrape job {} started", job.job_id));
                self.last_job = Some(job.clone());
                job
            }
            Err(err) => {
                self.log.failure(format!("scrape failed: {err}"));
                return None;
            }
        };

        if let Some(schedule) = schedule {
            self.repoll(schedule).await;
        }
        Some(job)
    }

    /// Re-poll the feed until one reload succeeds or attempts run out.
    async fn repoll(&mut self, schedule: RefreshSchedule) {
        for attempt in 1..=schedule.attempts {
            let cancel = self.cancel.clone();
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                _ = tokio::time::sleep(schedule.delay) => {}
            }
            debug!(attempt, "re-polling feed after scrape");
            if self.refresh().await {
                return;
            }
        }
    }

    /// Current feed filtered by title; an empty query returns everything.
    pub fn filtered(&self, query: &str) -> Vec<&Regulation> {
        filter_by_title(&self.regulations, query)
    }

    pub fn regulations(&self) -> &[Regulation] {
        &self.regulations
    }

    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }

    pub fn last_job(&self) -> Option<&ScrapeJob> {
        self.last_job.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Cancel any in-flight load. A disposed surface must never mutate
    /// view state afterwards; a cancelled refresh only clears the
    /// loading flag.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
