//! Goal store: owns the `goals` table.

use super::db::Db;
use crate::libs::error::{not_found_or_storage, StoreError};
use crate::libs::goal::Goal;
use chrono::Utc;
use rusqlite::{params, Row};

const INSERT_GOAL: &str = "INSERT INTO goals (title, created_at) VALUES (?1, ?2)
    RETURNING id, title, created_at";
const SELECT_GOALS: &str = "SELECT id, title, created_at FROM goals
    ORDER BY created_at DESC, id DESC";
const SELECT_GOAL: &str = "SELECT id, title, created_at FROM goals WHERE id = ?1";

#[derive(Clone)]
pub struct Goals {
    db: Db,
}

impl Goals {
    pub fn new(db: Db) -> Self {
        Goals { db }
    }

    /// Inserts a goal stamped with the current time and returns the stored row.
    ///
    /// Titles are taken as given; an empty title is accepted.
    pub fn create(&self, title: &str) -> Result<Goal, StoreError> {
        let conn = self.db.conn();
        let goal = conn.query_row(INSERT_GOAL, params![title, Utc::now()], map_goal)?;

        Ok(goal)
    }

    /// All goals, most recent first. Empty when there are none.
    pub fn list(&self) -> Result<Vec<Goal>, StoreError> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(SELECT_GOALS)?;
        let goals = stmt.query_map([], map_goal)?.collect::<Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    pub fn get(&self, id: i64) -> Result<Goal, StoreError> {
        let conn = self.db.conn();
        conn.query_row(SELECT_GOAL, params![id], map_goal).map_err(not_found_or_storage("goal", id))
    }
}

/// Decodes a row selected as `id, title, created_at`, in that order.
fn map_goal(row: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        title: row.get(1)?,
        created_at: row.get(2)?,
    })
}
