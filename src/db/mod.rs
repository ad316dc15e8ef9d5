//! SQLite persistence.
//!
//! One [`db::Db`] handle wraps the connection; [`goals::Goals`] and
//! [`tasks::Tasks`] each own one table and share that handle. The schema is
//! brought up to date by [`migrations`] every time the database is opened.

/// Connection handle and database location.
pub mod db;

/// Goal records.
pub mod goals;

/// Versioned schema migrations.
pub mod migrations;

/// Task records, including the incomplete-task query used by the daily report.
pub mod tasks;
