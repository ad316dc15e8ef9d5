//! Configuration for the gtd service.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file means defaults. After the file is read,
//! `GTD_*` environment variables (a `.env` file is loaded at startup) can
//! override individual values, and `serve` flags override those in turn.
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 4000 },
//!   "database": { "path": null },
//!   "report": { "enabled": true, "schedule": "30 8 * * *" },
//!   "log": { "filter": "gtd=info,tower_http=info" }
//! }
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::logging::DEFAULT_FILTER;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default schedule of the daily incomplete-tasks report: every day at 08:30.
pub const DEFAULT_REPORT_SCHEDULE: &str = "30 8 * * *";

/// HTTP listener settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Location of the SQLite database.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DatabaseConfig {
    /// Explicit database file. `None` means `gtd.db` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Daily incomplete-tasks report.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub enabled: bool,
    /// Five-field cron expression, evaluated in local time.
    pub schedule: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            enabled: true,
            schedule: DEFAULT_REPORT_SCHEDULE.to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Path of `config.json` in the default data directory.
    pub fn default_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration file from the data directory and applies
    /// `GTD_*` environment overrides.
    pub fn read() -> Result<Config> {
        let config = Self::read_from(&Self::default_path()?)?;
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads configuration from `path`, falling back to defaults if the file
    /// does not exist. No environment overrides are applied.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            msg_debug!(format!("No configuration at {}, using defaults", path.display()));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies overrides from `lookup` (normally the process environment).
    ///
    /// Recognised keys: `GTD_HOST`, `GTD_PORT`, `GTD_DB_PATH`,
    /// `GTD_REPORT_SCHEDULE`, `GTD_REPORT_ENABLED`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GTD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GTD_PORT") {
            self.server.port = match port.trim().parse() {
                Ok(port) => port,
                Err(_) => msg_bail_anyhow!(Message::ConfigInvalidOverride {
                    key: "GTD_PORT".to_string(),
                    value: port,
                }),
            };
        }
        if let Some(path) = lookup("GTD_DB_PATH") {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(schedule) = lookup("GTD_REPORT_SCHEDULE") {
            self.report.schedule = schedule;
        }
        if let Some(enabled) = lookup("GTD_REPORT_ENABLED") {
            self.report.enabled = match enabled.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => msg_bail_anyhow!(Message::ConfigInvalidOverride {
                    key: "GTD_REPORT_ENABLED".to_string(),
                    value: enabled,
                }),
            };
        }
        Ok(self)
    }

    /// Database file to open: `database.path` if set, otherwise `gtd.db` in
    /// the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// `host:port` the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = Config::default()
            .with_overrides(lookup_from(&[
                ("GTD_HOST", "0.0.0.0"),
                ("GTD_PORT", "8080"),
                ("GTD_DB_PATH", "/tmp/gtd-test.db"),
                ("GTD_REPORT_SCHEDULE", "0 9 * * 1-5"),
                ("GTD_REPORT_ENABLED", "off"),
            ]))
            .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database.path, Some(PathBuf::from("/tmp/gtd-test.db")));
        assert_eq!(config.report.schedule, "0 9 * * 1-5");
        assert!(!config.report.enabled);
    }

    #[test]
    fn explicit_database_path_wins() {
        let mut config = Config::default();
        config.database.path = Some(PathBuf::from("/var/lib/gtd/data.db"));
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/var/lib/gtd/data.db"));
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let config = Config::default().with_overrides(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_port_override_is_rejected() {
        let result = Config::default().with_overrides(lookup_from(&[("GTD_PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_enabled_override_is_rejected() {
        let result = Config::default().with_overrides(lookup_from(&[("GTD_REPORT_ENABLED", "maybe")]));
        assert!(result.is_err());
    }
}
