//! SQLite persistence for task records

use std::path::Path;

use chrono::NaiveDate;
use eyre::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::domain::{Priority, Task};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    priority TEXT NOT NULL,
    due_date TEXT,
    completed INTEGER NOT NULL DEFAULT 0
)";
const INSERT_TASK: &str = "INSERT INTO tasks (name, priority, due_date, completed) VALUES (?, ?, ?, 0)";
const SELECT_TASKS: &str = "SELECT id, name, priority, due_date, completed FROM tasks ORDER BY id DESC";
const SELECT_TASK_BY_ID: &str = "SELECT id, name, priority, due_date, completed FROM tasks WHERE id = ?";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?, priority = ?, due_date = ? WHERE id = ?";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ? WHERE id = ?";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?";

/// The durable task store
///
/// Owns its SQLite connection; constructed once at process start and
/// passed by reference to call sites. The connection closes on drop.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open (creating if missing) the database file at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create database directory")?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        debug!(?path, "Opened task store");
        Ok(Self { conn })
    }

    /// Ensure the tasks table exists
    ///
    /// Idempotent; call once per process start, before any other
    /// operation.
    pub fn init(&self) -> Result<()> {
        self.conn.execute(SCHEMA_TASKS, [])?;
        Ok(())
    }

    /// Insert a new task with `completed = false` and an auto-assigned id
    ///
    /// The store does not validate `name`; callers trim and reject empty
    /// input before getting here.
    pub fn create(&self, name: &str, priority: Priority, due_date: Option<NaiveDate>) -> Result<()> {
        self.conn.execute(
            INSERT_TASK,
            params![name, priority.to_string(), due_date.map(|d| d.to_string())],
        )?;
        info!(name, "Created task");
        Ok(())
    }

    /// Fetch every stored task, most recently created first
    ///
    /// No filtering or pagination at this layer; display order beyond
    /// the id ordering is the view module's concern.
    pub fn list_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let rows = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        debug!(count = tasks.len(), "Fetched tasks");
        Ok(tasks)
    }

    /// Fetch a single task by id, or None if no row matches
    pub fn get(&self, id: i64) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(SELECT_TASK_BY_ID, params![id], task_from_row)
            .optional()?;
        Ok(task)
    }

    /// Overwrite name, priority, and due date for the task at `id`
    ///
    /// Leaves the completion flag untouched. A missing id is a no-op,
    /// not an error; callers that care check existence first with
    /// [`get`](Self::get).
    pub fn update(&self, id: i64, name: &str, priority: Priority, due_date: Option<NaiveDate>) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![name, priority.to_string(), due_date.map(|d| d.to_string()), id],
        )?;
        debug!(id, affected, "Updated task");
        Ok(())
    }

    /// Overwrite only the completion flag for the task at `id`
    ///
    /// A missing id is a no-op.
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<()> {
        self.conn.execute(UPDATE_COMPLETED, params![completed, id])?;
        debug!(id, completed, "Set completion");
        Ok(())
    }

    /// Delete the task at `id`
    ///
    /// Removing a nonexistent id is a no-op, not an error.
    pub fn remove(&self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected > 0 {
            info!(id, "Deleted task");
        }
        Ok(())
    }
}

/// Map a tasks row back to a Task, re-parsing the stored TEXT forms
///
/// A row whose priority or due date no longer parses is a storage
/// failure, not a row to skip.
fn task_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let priority: String = row.get(2)?;
    let priority = priority.parse::<Priority>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, e.into())
    })?;

    let due_date: Option<String> = row.get(3)?;
    let due_date = due_date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
            })
        })
        .transpose()?;

    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        priority,
        due_date,
        completed: row.get(4)?,
    })
}
