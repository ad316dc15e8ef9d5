//! # gtd
//!
//! A small goals-and-tasks backend: goals group tasks, tasks can be marked
//! complete, and every morning a scheduled job logs the tasks still open.
//!
//! - [`api`]: JSON HTTP endpoints over the stores (axum)
//! - [`db`]: SQLite persistence and schema migrations
//! - [`libs`]: domain types, configuration, logging, the report and the scheduler
//! - [`commands`]: the `gtd` command line (`serve`, `report`, `migrations`, `init`)
//!
//! ```rust,no_run
//! use gtd::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
