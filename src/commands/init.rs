use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let path = Config::default_path()?;
    if write_default(&path, init_args.force)? {
        msg_print!(Message::ConfigSaved(path.display().to_string()));
    } else {
        msg_warning!(Message::ConfigAlreadyExists(path.display().to_string()));
    }
    Ok(())
}

/// Writes the default configuration to `path`.
///
/// Returns `false` without touching the file when it already exists and
/// `force` is not set.
pub fn write_default(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::default().save_to(path)?;
    Ok(true)
}
