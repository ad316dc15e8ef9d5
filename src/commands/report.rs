use super::config_with_db;
use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::report::DailyIncompleteTasksReport;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Database file instead of the configured one
    #[arg(long)]
    db: Option<PathBuf>,
}

/// Produces the daily incomplete-tasks report once, outside the schedule.
pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = config_with_db(report_args.db)?;
    let db = Db::open(&config.database_path()?)?;
    let report = DailyIncompleteTasksReport::new(Arc::new(Tasks::new(db)));

    tokio::task::spawn_blocking(move || report.generate()).await?;
    Ok(())
}
