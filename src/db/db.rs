use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

pub const DB_FILE_NAME: &str = "gtd.db";

/// Shared handle to the single SQLite connection.
///
/// Cloning is cheap; every clone talks to the same connection. The goal
/// store, the task store and the HTTP state each hold one. The connection is
/// closed when the last clone is dropped.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens `gtd.db` in the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens (or creates) the database at `path` and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        Self::configure(&conn)?;
        init_with_migrations(&mut conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db::from_connection(conn))
    }

    /// Migrated in-memory database. Contents vanish when the handle is dropped.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        init_with_migrations(&mut conn)?;

        Ok(Db::from_connection(conn))
    }

    /// Raw connection at `path` with no migrations applied.
    pub fn new_without_migrations(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        Ok(conn)
    }

    fn from_connection(conn: Connection) -> Db {
        Db { conn: Arc::new(Mutex::new(conn)) }
    }

    fn configure(conn: &Connection) -> rusqlite::Result<()> {
        // SQLite leaves foreign keys off unless asked, per connection.
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        Ok(())
    }

    /// Locks the connection for one statement.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}
