pub mod init;
pub mod migrations;
pub mod report;
pub mod serve;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the default configuration file")]
    Init(init::InitArgs),
    #[command(about = "Run the HTTP API and the daily report scheduler")]
    Serve(serve::ServeArgs),
    #[command(about = "Log the incomplete-tasks report once and exit")]
    Report(report::ReportArgs),
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Configuration with a `--db` flag applied on top.
fn config_with_db(db: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::read()?;
    if let Some(path) = db {
        config.database.path = Some(path);
    }
    Ok(config)
}
