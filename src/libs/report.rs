//! Daily report of incomplete tasks.
//!
//! The report reads through [`IncompleteTasksSource`] only, so it does not
//! depend on how tasks are stored, and writes through a [`ReportSink`]
//! (normally [`TracingSink`], i.e. the service log). It is registered with
//! the [`Scheduler`](super::scheduler::Scheduler) and never exposed over HTTP.

use super::error::StoreError;
use super::messages::Message;
use super::scheduler::JobHandler;
use super::task::Task;
use chrono::{DateTime, Local, TimeZone};
use std::sync::Arc;

pub const REPORT_JOB_NAME: &str = "daily-incomplete-tasks-report";
pub const REPORT_JOB_TITLE: &str = "Daily Incomplete Tasks Report";

/// Read access to incomplete tasks, newest first.
pub trait IncompleteTasksSource: Send + Sync {
    fn list_incomplete_tasks(&self) -> Result<Vec<Task>, StoreError>;
}

/// Destination for report lines.
pub trait ReportSink: Send + Sync {
    fn info(&self, line: &str);
    fn error(&self, line: &str);
}

/// Writes report lines to the `tracing` log under target `gtd::report`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn info(&self, line: &str) {
        tracing::info!(target: "gtd::report", "{}", line);
    }

    fn error(&self, line: &str) {
        tracing::error!(target: "gtd::report", "{}", line);
    }
}

/// Formats the report for `tasks` in the order given.
///
/// No tasks gives a single line. Otherwise a header, one line per task
/// (goal id, title, creation date) and a footer. Creation dates are shown
/// in the time zone of `generated_at`.
pub fn render_report<Tz>(tasks: &[Task], generated_at: &DateTime<Tz>) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if tasks.is_empty() {
        return vec![Message::ReportNoIncompleteTasks.to_string()];
    }

    let mut lines = Vec::with_capacity(tasks.len() + 2);
    lines.push(
        Message::ReportHeader {
            generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            count: tasks.len(),
        }
        .to_string(),
    );
    for (i, task) in tasks.iter().enumerate() {
        lines.push(
            Message::ReportTaskLine {
                index: i + 1,
                goal_id: task.goal_id,
                title: task.title.clone(),
                created: task.created_at.with_timezone(&generated_at.timezone()).format("%Y-%m-%d").to_string(),
            }
            .to_string(),
        );
    }
    lines.push(Message::ReportFooter.to_string());
    lines
}

pub struct DailyIncompleteTasksReport {
    source: Arc<dyn IncompleteTasksSource>,
    sink: Arc<dyn ReportSink>,
}

impl DailyIncompleteTasksReport {
    /// Report that logs through `tracing`.
    pub fn new(source: Arc<dyn IncompleteTasksSource>) -> Self {
        Self::with_sink(source, Arc::new(TracingSink))
    }

    pub fn with_sink(source: Arc<dyn IncompleteTasksSource>, sink: Arc<dyn ReportSink>) -> Self {
        Self { source, sink }
    }

    /// Produces and emits one report.
    ///
    /// A failed read is written to the sink as an error and ends the run;
    /// it is not retried and not returned, since nobody is waiting on it.
    pub fn generate(&self) {
        let tasks = match self.source.list_incomplete_tasks() {
            Ok(tasks) => tasks,
            Err(e) => {
                self.sink.error(&Message::ReportFetchFailed(e.to_string()).to_string());
                return;
            }
        };

        for line in render_report(&tasks, &Local::now()) {
            self.sink.info(&line);
        }
    }
}

impl JobHandler for DailyIncompleteTasksReport {
    fn run(&self) -> anyhow::Result<()> {
        self.generate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn task(id: i64, goal_id: i64, title: &str) -> Task {
        Task {
            id,
            goal_id,
            title: title.to_string(),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2025, 6, 24, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_report_is_a_single_line() {
        let generated_at = Utc.with_ymd_and_hms(2025, 6, 25, 8, 30, 0).unwrap();
        let lines = render_report(&[], &generated_at);
        assert_eq!(lines, vec!["✅ No incomplete tasks found!".to_string()]);
    }

    #[test]
    fn report_lists_tasks_between_header_and_footer() {
        let generated_at = Utc.with_ymd_and_hms(2025, 6, 25, 8, 30, 0).unwrap();
        let tasks = vec![task(2, 1, "Write tests"), task(1, 3, "Read book")];

        let lines = render_report(&tasks, &generated_at);

        assert_eq!(
            lines,
            vec![
                "=== Daily Incomplete Tasks Report (2025-06-25 08:30:00): 2 incomplete task(s) ===".to_string(),
                "  1. [Goal ID: 1] Write tests (Created: 2025-06-24)".to_string(),
                "  2. [Goal ID: 3] Read book (Created: 2025-06-24)".to_string(),
                "=== End Report ===".to_string(),
            ]
        );
    }

    #[test]
    fn task_dates_follow_report_time_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let generated_at = tokyo.with_ymd_and_hms(2025, 6, 25, 8, 30, 0).unwrap();
        // 20:00 UTC on the 24th is already the 25th in UTC+9.
        let mut late = task(1, 1, "Late task");
        late.created_at = Utc.with_ymd_and_hms(2025, 6, 24, 20, 0, 0).unwrap();

        let lines = render_report(&[late], &generated_at);

        assert_eq!(lines[1], "  1. [Goal ID: 1] Late task (Created: 2025-06-25)");
    }
}
