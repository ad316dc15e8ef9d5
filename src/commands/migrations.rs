use super::config_with_db;
use crate::db::db::Db;
use crate::db::migrations::{get_db_version, needs_migration, MigrationManager};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status {
        /// Database file instead of the configured one
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Show migration history
    History {
        /// Database file instead of the configured one
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

/// Reads migration state without applying anything.
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    match args.command {
        MigrationsCommand::Status { db } => {
            let conn = Db::new_without_migrations(&config_with_db(db)?.database_path()?)?;
            let version = get_db_version(&conn)?;

            msg_print!(Message::DatabaseVersion(version));
            if needs_migration(&conn)? {
                msg_print!(Message::DatabaseNeedsUpdate);
            } else {
                msg_print!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History { db } => {
            let conn = Db::new_without_migrations(&config_with_db(db)?.database_path()?)?;
            let history = MigrationManager::new().get_migration_history(&conn)?;

            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                msg_print!(Message::MigrationHistoryEntry { version, name, applied_at });
            }
        }
    }

    Ok(())
}
