//! Task record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Priority;

/// A single to-do item as stored in the tasks table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store on insert, never reused
    pub id: i64,

    /// Display name, non-empty after trimming
    pub name: String,

    /// Priority level
    pub priority: Priority,

    /// Due date (date only, no time component); None means no due date
    pub due_date: Option<NaiveDate>,

    /// Completion flag, false at creation
    pub completed: bool,
}
