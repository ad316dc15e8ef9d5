//! Cron-style scheduler for background jobs.
//!
//! A [`CronJob`] pairs a five-field cron expression with a [`JobHandler`].
//! The scheduler owns the timing: one tokio task per job sleeps until the
//! next occurrence (local time), runs the handler on the blocking pool and
//! goes back to sleep. A failing or panicking run is logged and the next
//! occurrence is scheduled as usual.
//!
//! ```rust,ignore
//! let mut scheduler = Scheduler::new();
//! scheduler.register(CronJob::new("daily-report", "Daily report", "30 8 * * *", handler)?);
//! let handle = scheduler.spawn();
//! // ...
//! handle.shutdown().await;
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success, msg_warning};
use chrono::{DateTime, Local, TimeZone};
use croner::Cron;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("invalid cron expression '{expression}': {reason}")]
    InvalidSchedule { expression: String, reason: String },

    #[error("no occurrence of '{expression}' after the given time: {reason}")]
    NoNextRun { expression: String, reason: String },
}

/// Work performed when a job fires. Runs on the blocking thread pool.
pub trait JobHandler: Send + Sync + 'static {
    fn run(&self) -> anyhow::Result<()>;
}

pub struct CronJob {
    name: String,
    title: String,
    expression: String,
    cron: Cron,
    handler: Arc<dyn JobHandler>,
}

impl CronJob {
    pub fn new(name: impl Into<String>, title: impl Into<String>, expression: &str, handler: Arc<dyn JobHandler>) -> Result<Self, SchedulerError> {
        let expression = expression.trim();
        let cron = expression.parse::<Cron>().map_err(|e| SchedulerError::InvalidSchedule {
            expression: expression.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: name.into(),
            title: title.into(),
            expression: expression.to_string(),
            cron,
            handler,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Next occurrence strictly after `from`.
    pub fn next_run_after<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> Result<DateTime<Tz>, SchedulerError> {
        self.cron.find_next_occurrence(from, false).map_err(|e| SchedulerError::NoNextRun {
            expression: self.expression.clone(),
            reason: e.to_string(),
        })
    }

    /// Runs the handler once, now.
    ///
    /// The outcome is logged; errors and panics are also returned so callers
    /// running a job by hand can react to them.
    pub async fn trigger(&self) -> anyhow::Result<()> {
        msg_info!(Message::JobStarted {
            title: self.title.clone(),
            name: self.name.clone(),
        });

        let handler = Arc::clone(&self.handler);
        match tokio::task::spawn_blocking(move || handler.run()).await {
            Ok(Ok(())) => {
                msg_success!(Message::JobFinished(self.name.clone()));
                Ok(())
            }
            Ok(Err(e)) => {
                msg_error!(Message::JobFailed {
                    name: self.name.clone(),
                    error: e.to_string(),
                });
                Err(e)
            }
            Err(e) => {
                let message = Message::JobPanicked {
                    name: self.name.clone(),
                    error: e.to_string(),
                };
                msg_error!(message);
                Err(anyhow::anyhow!(message.to_string()))
            }
        }
    }
}

#[derive(Default)]
pub struct Scheduler {
    jobs: Vec<Arc<CronJob>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, job: CronJob) {
        msg_info!(Message::JobRegistered {
            title: job.title.clone(),
            name: job.name.clone(),
            schedule: job.expression.clone(),
        });
        self.jobs.push(Arc::new(job));
    }

    pub fn jobs(&self) -> &[Arc<CronJob>] {
        &self.jobs
    }

    /// Starts one timer task per registered job. Must be called inside a
    /// tokio runtime.
    pub fn spawn(self) -> SchedulerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let count = self.jobs.len();

        let handles = self.jobs.into_iter().map(|job| tokio::spawn(run_job_loop(job, shutdown_rx.clone()))).collect();

        msg_info!(Message::SchedulerStarted(count));
        SchedulerHandle { shutdown_tx, handles }
    }
}

/// Running scheduler. Dropping it without calling [`shutdown`](Self::shutdown)
/// also stops the timers, but without waiting for them.
pub struct SchedulerHandle {
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stops all timers and waits for them. A run that is already in
    /// progress is allowed to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for handle in self.handles {
            if let Err(e) = handle.await {
                msg_warning!(Message::JobPanicked {
                    name: "scheduler".to_string(),
                    error: e.to_string(),
                });
            }
        }
        msg_info!(Message::SchedulerStopped);
    }
}

async fn run_job_loop(job: Arc<CronJob>, mut shutdown: watch::Receiver<bool>) {
    let mut last_run: Option<DateTime<Local>> = None;

    loop {
        let now = Local::now();
        // Never schedule at or before the occurrence that just fired, even if
        // the timer woke a little early.
        let from = match last_run {
            Some(last) if last > now => last,
            _ => now,
        };

        let next = match job.next_run_after(&from) {
            Ok(next) => next,
            Err(e) => {
                msg_warning!(Message::JobNoNextRun {
                    name: job.name.clone(),
                    error: e.to_string(),
                });
                return;
            }
        };
        msg_debug!(Message::JobNextRun {
            name: job.name.clone(),
            at: next.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
        });

        let wait = (next - now).to_std().unwrap_or_default();
        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                last_run = Some(next);
                // Errors are already logged by trigger; the next run is unaffected.
                let _ = job.trigger().await;
            }
            _ = shutdown.changed() => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(AtomicUsize);

    impl JobHandler for Counter {
        fn run(&self) -> anyhow::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    impl JobHandler for Failing {
        fn run(&self) -> anyhow::Result<()> {
            anyhow::bail!("database is down")
        }
    }

    struct Panicking;

    impl JobHandler for Panicking {
        fn run(&self) -> anyhow::Result<()> {
            panic!("boom")
        }
    }

    #[test]
    fn daily_schedule_fires_at_configured_time() {
        let job = CronJob::new("report", "Report", "30 8 * * *", Arc::new(Counter(AtomicUsize::new(0)))).unwrap();
        let from = Utc.with_ymd_and_hms(2025, 6, 24, 9, 0, 0).unwrap();

        let next = job.next_run_after(&from).unwrap();

        assert_eq!(next, Utc.with_ymd_and_hms(2025, 6, 25, 8, 30, 0).unwrap());
        assert_eq!((next.hour(), next.minute()), (8, 30));
    }

    #[test]
    fn next_run_is_strictly_after_start() {
        let job = CronJob::new("report", "Report", "30 8 * * *", Arc::new(Counter(AtomicUsize::new(0)))).unwrap();
        let at_occurrence = Utc.with_ymd_and_hms(2025, 6, 24, 8, 30, 0).unwrap();

        let next = job.next_run_after(&at_occurrence).unwrap();

        assert_eq!(next, Utc.with_ymd_and_hms(2025, 6, 25, 8, 30, 0).unwrap());
    }

    #[test]
    fn invalid_expression_is_rejected() {
        for expression in ["not a cron", "garbage", "61 8 * * *", "30 8 * *"] {
            let result = CronJob::new("report", "Report", expression, Arc::new(Failing));
            assert!(matches!(result, Err(SchedulerError::InvalidSchedule { .. })), "{}", expression);
        }
    }

    #[test]
    fn next_run_from_now_is_in_the_future() {
        let job = CronJob::new("report", "Report", "30 8 * * *", Arc::new(Counter(AtomicUsize::new(0)))).unwrap();
        let now = Local::now();

        let next = job.next_run_after(&now).unwrap();

        assert!(next > now);
        assert_eq!((next.hour(), next.minute()), (8, 30));
        assert_eq!(job.title(), "Report");
    }

    #[tokio::test]
    async fn trigger_runs_handler() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let job = CronJob::new("count", "Count", "* * * * *", counter.clone()).unwrap();

        job.trigger().await.unwrap();
        job.trigger().await.unwrap();

        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn trigger_reports_failure_without_panicking() {
        let job = CronJob::new("fail", "Fail", "* * * * *", Arc::new(Failing)).unwrap();
        let error = job.trigger().await.unwrap_err();
        assert!(error.to_string().contains("database is down"));
    }

    #[tokio::test]
    async fn trigger_contains_handler_panic() {
        let job = CronJob::new("panic", "Panic", "* * * * *", Arc::new(Panicking)).unwrap();
        assert!(job.trigger().await.is_err());
    }

    #[tokio::test]
    async fn shutdown_stops_waiting_jobs() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut scheduler = Scheduler::new();
        scheduler.register(CronJob::new("yearly", "Yearly", "0 0 1 1 *", counter.clone()).unwrap());
        assert_eq!(scheduler.jobs().len(), 1);

        let handle = scheduler.spawn();
        tokio::time::timeout(std::time::Duration::from_secs(5), handle.shutdown()).await.unwrap();

        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }
}
