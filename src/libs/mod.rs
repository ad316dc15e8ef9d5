//! Domain types and service infrastructure.
//!
//! - [`goal`], [`task`]: the two entities and their request/response shapes
//! - [`error`]: store failures ([`error::StoreError`])
//! - [`report`]: the daily incomplete-tasks report
//! - [`scheduler`]: cron scheduling for background jobs
//! - [`config`], [`data_storage`], [`logging`], [`messages`]: ambient plumbing

pub mod config;
pub mod data_storage;
pub mod error;
pub mod goal;
pub mod logging;
pub mod messages;
pub mod report;
pub mod scheduler;
pub mod task;
