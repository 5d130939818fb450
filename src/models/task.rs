use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// A single tracked task.
///
/// Tasks live in one flat collection, persisted to disk as a JSON array in
/// insertion order. `id` is unique within the collection and derived from
/// it (max existing id + 1), so a reload can never drift from what was
/// persisted. `created_at` is set once at creation; every mutation
/// refreshes `updated_at`, so `updated_at >= created_at` always holds.
///
/// Field names serialize as camelCase (`createdAt`, `updatedAt`) to match
/// the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The workflow status of a task.
///
/// - `Todo`: Not yet started
/// - `InProgress`: Being worked on
/// - `Done`: Finished
///
/// Transitions are unrestricted: any status may move to any other, so
/// `done` can go back to `todo`. There is no workflow-order enforcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| TaskError::InvalidStatus {
            value: s.to_string(),
        })
    }
}

/// Input for creating a new task. Both fields are required and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub name: String,
    pub description: String,
}

/// Input for updating an existing task. All fields are optional for
/// partial updates; an absent field means "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskInput {
    pub name: Option<String>,
    pub description: Option<String>,
}
