#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use gtd::commands::serve::build_scheduler;
    use gtd::db::db::Db;
    use gtd::db::goals::Goals;
    use gtd::db::tasks::Tasks;
    use gtd::libs::config::ReportConfig;
    use gtd::libs::error::StoreError;
    use gtd::libs::report::{DailyIncompleteTasksReport, IncompleteTasksSource, ReportSink, REPORT_JOB_NAME, REPORT_JOB_TITLE};
    use gtd::libs::scheduler::{CronJob, JobHandler};
    use gtd::libs::task::Task;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use test_context::{test_context, AsyncTestContext, TestContext};

    #[derive(Default)]
    struct CapturingSink {
        info: Mutex<Vec<String>>,
        error: Mutex<Vec<String>>,
    }

    impl ReportSink for CapturingSink {
        fn info(&self, line: &str) {
            self.info.lock().push(line.to_string());
        }

        fn error(&self, line: &str) {
            self.error.lock().push(line.to_string());
        }
    }

    struct FailingSource;

    impl IncompleteTasksSource for FailingSource {
        fn list_incomplete_tasks(&self) -> Result<Vec<Task>, StoreError> {
            Err(StoreError::Storage(rusqlite::Error::InvalidQuery))
        }
    }

    struct ReportTestContext {
        goals: Goals,
        tasks: Tasks,
        sink: Arc<CapturingSink>,
    }

    impl ReportTestContext {
        fn report(&self) -> DailyIncompleteTasksReport {
            DailyIncompleteTasksReport::with_sink(Arc::new(self.tasks.clone()), self.sink.clone())
        }
    }

    impl ReportTestContext {
        fn new() -> Self {
            let db = Db::in_memory().unwrap();
            ReportTestContext {
                goals: Goals::new(db.clone()),
                tasks: Tasks::new(db),
                sink: Arc::new(CapturingSink::default()),
            }
        }
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            ReportTestContext::new()
        }
    }

    /// Same fixture for tests that drive the job through the scheduler.
    struct ScheduledReportContext(ReportTestContext);

    impl AsyncTestContext for ScheduledReportContext {
        async fn setup() -> Self {
            ScheduledReportContext(ReportTestContext::new())
        }
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_lists_incomplete_tasks_only(ctx: &mut ReportTestContext) {
        let goal = ctx.goals.create("G").unwrap();
        let a = ctx.tasks.create(goal.id, "A").unwrap();
        ctx.tasks.create(goal.id, "B").unwrap();
        ctx.tasks.update_completion(a.id, true).unwrap();

        ctx.report().generate();

        let info = ctx.sink.info.lock().clone();
        assert_eq!(info.len(), 3);
        assert!(info[0].contains("1 incomplete task(s)"));
        assert!(info[1].contains(&format!("[Goal ID: {}] B", goal.id)));
        assert!(!info.iter().any(|line| line.contains("] A ")));
        assert_eq!(info[2], "=== End Report ===");
        assert!(ctx.sink.error.lock().is_empty());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_without_tasks_is_one_line(ctx: &mut ReportTestContext) {
        ctx.report().generate();

        assert_eq!(*ctx.sink.info.lock(), vec!["✅ No incomplete tasks found!".to_string()]);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_lists_newest_first(ctx: &mut ReportTestContext) {
        let goal = ctx.goals.create("G").unwrap();
        ctx.tasks.create(goal.id, "older").unwrap();
        ctx.tasks.create(goal.id, "newer").unwrap();

        ctx.report().generate();

        let info = ctx.sink.info.lock().clone();
        assert!(info[1].contains("newer"));
        assert!(info[2].contains("older"));
    }

    #[test]
    fn test_report_fetch_failure_is_logged_not_raised() {
        let sink = Arc::new(CapturingSink::default());
        let report = DailyIncompleteTasksReport::with_sink(Arc::new(FailingSource), sink.clone());

        assert!(report.run().is_ok());

        let errors = sink.error.lock().clone();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error fetching incomplete tasks:"));
        assert!(sink.info.lock().is_empty());
    }

    #[test_context(ScheduledReportContext)]
    #[tokio::test]
    async fn test_report_job_runs_through_scheduler(ctx: &mut ScheduledReportContext) {
        let ctx = &ctx.0;
        let goal = ctx.goals.create("G").unwrap();
        ctx.tasks.create(goal.id, "Pending").unwrap();

        let job = CronJob::new(REPORT_JOB_NAME, REPORT_JOB_TITLE, "30 8 * * *", Arc::new(ctx.report())).unwrap();
        let from = Utc.with_ymd_and_hms(2025, 6, 24, 7, 0, 0).unwrap();
        assert_eq!(job.next_run_after(&from).unwrap(), Utc.with_ymd_and_hms(2025, 6, 24, 8, 30, 0).unwrap());

        let next = job.next_run_after(&chrono::Local::now()).unwrap();
        assert!(next > chrono::Local::now());

        job.trigger().await.unwrap();

        assert!(ctx.sink.info.lock().iter().any(|line| line.contains("Pending")));
    }

    #[test_context(ScheduledReportContext)]
    #[tokio::test]
    async fn test_invalid_report_schedule_fails_startup(ctx: &mut ScheduledReportContext) {
        let mut report = ReportConfig::default();
        assert_eq!(build_scheduler(&report, &ctx.0.tasks).unwrap().jobs().len(), 1);

        report.schedule = "garbage".to_string();
        assert!(build_scheduler(&report, &ctx.0.tasks).is_err());

        report.enabled = false;
        assert!(build_scheduler(&report, &ctx.0.tasks).unwrap().jobs().is_empty());
    }
}
