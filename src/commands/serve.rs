//! `gtd serve`: the long-running service.
//!
//! Opens the database, starts the report scheduler and serves the HTTP API
//! until SIGTERM or SIGINT (Ctrl+C elsewhere). On shutdown the server drains
//! in-flight requests, the scheduler stops and the connection is closed.

use super::config_with_db;
use crate::api::{self, AppState};
use crate::db::db::Db;
use crate::db::goals::Goals;
use crate::db::tasks::Tasks;
use crate::libs::config::ReportConfig;
use crate::libs::data_storage::{APP_NAME, APP_VERSION};
use crate::libs::messages::Message;
use crate::libs::report::{DailyIncompleteTasksReport, REPORT_JOB_NAME, REPORT_JOB_TITLE};
use crate::libs::scheduler::{CronJob, Scheduler};
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind instead of the configured host
    #[arg(long)]
    host: Option<String>,
    /// Port to bind instead of the configured port
    #[arg(short, long)]
    port: Option<u16>,
    /// Database file instead of the configured one
    #[arg(long)]
    db: Option<PathBuf>,
}

pub async fn cmd(serve_args: ServeArgs) -> Result<()> {
    let mut config = config_with_db(serve_args.db)?;
    if let Some(host) = serve_args.host {
        config.server.host = host;
    }
    if let Some(port) = serve_args.port {
        config.server.port = port;
    }

    msg_info!(Message::ServerStarting {
        name: APP_NAME.to_string(),
        version: APP_VERSION.to_string(),
    });

    let db = Db::open(&config.database_path()?)?;
    let goals = Goals::new(db.clone());
    let tasks = Tasks::new(db.clone());

    // An invalid schedule is a startup error, before anything is bound.
    let scheduler = build_scheduler(&config.report, &tasks)?;
    let listener = TcpListener::bind(config.bind_address()).await?;

    let scheduler = scheduler.spawn();
    let result = api::serve(listener, AppState::new(goals, tasks), shutdown_signal()).await;
    if let Err(e) = &result {
        msg_error!(Message::ServerError(e.to_string()));
    }

    scheduler.shutdown().await;
    drop(db);
    msg_info!(Message::DatabaseClosed);

    result
}

/// Scheduler with the daily report registered, or empty when the report is
/// disabled.
pub fn build_scheduler(report: &ReportConfig, tasks: &Tasks) -> Result<Scheduler> {
    let mut scheduler = Scheduler::new();
    if !report.enabled {
        msg_info!(Message::ReportDisabled);
        return Ok(scheduler);
    }

    let handler = DailyIncompleteTasksReport::new(Arc::new(tasks.clone()));
    scheduler.register(CronJob::new(REPORT_JOB_NAME, REPORT_JOB_TITLE, &report.schedule, Arc::new(handler))?);
    Ok(scheduler)
}

/// Resolves on the first termination signal.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => msg_info!(Message::ReceivedSigterm),
                    _ = sigint.recv() => msg_info!(Message::ReceivedSigint),
                }
                return;
            }
            (Err(e), _) | (_, Err(e)) => msg_warning!(Message::SignalHandlerFailed(e.to_string())),
        }
    }

    match tokio::signal::ctrl_c().await {
        Ok(()) => msg_info!(Message::ReceivedCtrlC),
        Err(e) => {
            msg_error!(Message::CtrlCListenFailed(e.to_string()));
            std::future::pending::<()>().await;
        }
    }
}
