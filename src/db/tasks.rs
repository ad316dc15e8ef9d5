//! Task store: owns the `tasks` table.
//!
//! Every query selects `id, goal_id, title, completed, created_at` in that
//! order and decodes through [`map_task`], so a column mismatch fails the
//! query instead of shuffling fields.

use super::db::Db;
use crate::libs::error::{not_found_or_storage, StoreError};
use crate::libs::report::IncompleteTasksSource;
use crate::libs::task::{Task, TaskFilter};
use chrono::Utc;
use rusqlite::{params, params_from_iter, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (goal_id, title, completed, created_at) VALUES (?1, ?2, ?3, ?4)
    RETURNING id, goal_id, title, completed, created_at";
const SELECT_TASKS: &str = "SELECT id, goal_id, title, completed, created_at FROM tasks";
const WHERE_GOAL: &str = "WHERE goal_id = ?1";
const WHERE_INCOMPLETE: &str = "WHERE completed = 0";
const ORDER_NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";
const UPDATE_COMPLETION: &str = "UPDATE tasks SET completed = ?1 WHERE id = ?2
    RETURNING id, goal_id, title, completed, created_at";

#[derive(Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: Db) -> Self {
        Tasks { db }
    }

    /// Inserts an incomplete task under `goal_id` and returns the stored row.
    ///
    /// The goal is not looked up first. An unknown `goal_id` is rejected by
    /// the foreign key and surfaces as [`StoreError::Storage`].
    pub fn create(&self, goal_id: i64, title: &str) -> Result<Task, StoreError> {
        let conn = self.db.conn();
        let task = conn.query_row(INSERT_TASK, params![goal_id, title, false, Utc::now()], map_task)?;

        Ok(task)
    }

    /// Tasks matching `filter`, most recent first. Empty when nothing matches.
    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>, StoreError> {
        let (sql, params) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_NEWEST_FIRST), vec![]),
            TaskFilter::ByGoal(goal_id) => (format!("{} {} {}", SELECT_TASKS, WHERE_GOAL, ORDER_NEWEST_FIRST), vec![goal_id]),
            TaskFilter::Incomplete => (format!("{} {} {}", SELECT_TASKS, WHERE_INCOMPLETE, ORDER_NEWEST_FIRST), vec![]),
        };

        let conn = self.db.conn();
        let mut stmt = conn.prepare(&sql)?;
        let tasks = stmt.query_map(params_from_iter(params.iter()), map_task)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn list_by_goal(&self, goal_id: i64) -> Result<Vec<Task>, StoreError> {
        self.fetch(TaskFilter::ByGoal(goal_id))
    }

    pub fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        self.fetch(TaskFilter::All)
    }

    pub fn list_incomplete(&self) -> Result<Vec<Task>, StoreError> {
        self.fetch(TaskFilter::Incomplete)
    }

    /// Sets `completed` on one task and returns the updated row.
    ///
    /// Returns [`StoreError::NotFound`] when no task has `task_id`.
    pub fn update_completion(&self, task_id: i64, completed: bool) -> Result<Task, StoreError> {
        let conn = self.db.conn();
        conn.query_row(UPDATE_COMPLETION, params![completed, task_id], map_task)
            .map_err(not_found_or_storage("task", task_id))
    }
}

impl IncompleteTasksSource for Tasks {
    fn list_incomplete_tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.list_incomplete()
    }
}

/// Decodes a row selected as `id, goal_id, title, completed, created_at`.
fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        goal_id: row.get(1)?,
        title: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
    })
}
