//! Human-readable text for every [`Message`].
//!
//! All log and console wording lives here so that the rest of the code only
//! deals with structured `Message` values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SERVER MESSAGES ===
            Message::ServerStarting { name, version } => format!("Starting {} v{}", name, version),
            Message::ServerListening(addr) => format!("Listening on http://{}", addr),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ServerError(error) => format!("Server error: {}", error),
            Message::ReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::ReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::ReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::CtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::SignalHandlerFailed(error) => format!("Failed to install signal handler: {}", error),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),
            Message::DatabaseClosed => "Database connection closed".to_string(),

            // === GOAL MESSAGES ===
            Message::GoalCreated(id) => format!("Goal {} created", id),

            // === TASK MESSAGES ===
            Message::TaskCreated { id, goal_id } => format!("Task {} created for goal {}", id, goal_id),
            Message::TaskCompletionUpdated { id, completed } => {
                format!("Task {} marked as {}", id, if *completed { "completed" } else { "incomplete" })
            }

            // === REQUEST MESSAGES ===
            Message::RequestFailed(error) => format!("Request failed: {}", error),
            Message::InvalidRequest(error) => format!("Invalid request: {}", error),
            Message::BlockingTaskFailed(error) => format!("Blocking store call failed: {}", error),

            // === SCHEDULER MESSAGES ===
            Message::SchedulerStarted(count) => format!("Scheduler started with {} job(s)", count),
            Message::SchedulerStopped => "Scheduler stopped".to_string(),
            Message::JobRegistered { title, name, schedule } => format!("Registered {} as '{}' ({})", title, name, schedule),
            Message::JobNextRun { name, at } => format!("Next run of '{}' at {}", name, at),
            Message::JobNoNextRun { name, error } => format!("Job '{}' has no upcoming run, stopping its timer: {}", name, error),
            Message::JobStarted { title, name } => format!("Running {} ('{}')", title, name),
            Message::JobFinished(name) => format!("Job '{}' finished", name),
            Message::JobFailed { name, error } => format!("Job '{}' failed: {}", name, error),
            Message::JobPanicked { name, error } => format!("Job '{}' panicked: {}", name, error),
            Message::ReportDisabled => "Daily report is disabled in configuration".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader { generated_at, count } => {
                format!("=== Daily Incomplete Tasks Report ({}): {} incomplete task(s) ===", generated_at, count)
            }
            Message::ReportTaskLine { index, goal_id, title, created } => {
                format!("  {}. [Goal ID: {}] {} (Created: {})", index, goal_id, title, created)
            }
            Message::ReportFooter => "=== End Report ===".to_string(),
            Message::ReportNoIncompleteTasks => "✅ No incomplete tasks found!".to_string(),
            Message::ReportFetchFailed(error) => format!("Error fetching incomplete tasks: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigAlreadyExists(path) => format!("Configuration already exists at {} (use --force to overwrite)", path),
            Message::ConfigInvalidOverride { key, value } => format!("Invalid value '{}' for {}", value, key),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry { version, name, applied_at } => format!("  v{}: {} (applied {})", version, name, applied_at),
        };
        write!(f, "{}", text)
    }
}
