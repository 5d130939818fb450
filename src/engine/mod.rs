//! The task mutation engine.

use chrono::Utc;

use crate::error::TaskError;
use crate::models::{CreateTaskInput, Task, TaskStatus, UpdateTaskInput};
use crate::store::TaskStore;
use crate::validate;

/// Owns the in-memory task collection and keeps it in sync with disk.
///
/// The collection is loaded once at construction and is the single source
/// of truth for the engine's lifetime; every mutating operation rewrites
/// the backing file before returning, and a failed write propagates as
/// [`TaskError::Storage`] so the caller knows the mutation did not stick.
///
/// The engine is synchronous and does no internal locking. A
/// multi-threaded host must serialize access externally.
pub struct TaskEngine {
    store: TaskStore,
    tasks: Vec<Task>,
}

impl TaskEngine {
    pub fn new(store: TaskStore) -> Self {
        let tasks = store.load();
        Self { store, tasks }
    }

    /// The full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Validates the input, assigns the next id, and appends a new task
    /// with status `todo` and both timestamps set to now.
    pub fn add_task(&mut self, input: CreateTaskInput) -> Result<Task, TaskError> {
        validate::validate_add(&input)?;

        let now = Utc::now();
        let task = Task {
            id: self.next_id(),
            name: input.name,
            description: input.description,
            status: TaskStatus::Todo,
            created_at: now,
            updated_at: now,
        };

        self.tasks.push(task.clone());
        self.persist()?;
        tracing::debug!("added task {}", task.id);
        Ok(task)
    }

    /// Applies the provided fields to an existing task and refreshes
    /// `updated_at`. Fields left out of the input keep their current
    /// values; a provided-but-empty field fails validation before
    /// anything is mutated.
    pub fn update_task(&mut self, id: u64, input: UpdateTaskInput) -> Result<Task, TaskError> {
        let idx = self.position(id)?;
        validate::validate_update(&input)?;

        let task = &mut self.tasks[idx];
        if let Some(name) = input.name {
            task.name = name;
        }
        if let Some(description) = input.description {
            task.description = description;
        }
        task.updated_at = Utc::now();

        let updated = task.clone();
        self.persist()?;
        tracing::debug!("updated task {}", id);
        Ok(updated)
    }

    pub fn delete_task(&mut self, id: u64) -> Result<(), TaskError> {
        let idx = self.position(id)?;
        self.tasks.remove(idx);
        self.persist()?;
        tracing::debug!("deleted task {}", id);
        Ok(())
    }

    /// Sets a task's status and refreshes `updated_at`. Any status may
    /// move to any other; there is no transition order to enforce.
    pub fn mark_status(&mut self, id: u64, status: TaskStatus) -> Result<(), TaskError> {
        let idx = self.position(id)?;

        let task = &mut self.tasks[idx];
        task.status = status;
        task.updated_at = Utc::now();

        self.persist()?;
        tracing::debug!("marked task {} as {}", id, status);
        Ok(())
    }

    /// Read-only lookup; never triggers a persistence write.
    pub fn find_task(&self, id: u64) -> Result<&Task, TaskError> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound { id })
    }

    /// Tasks in insertion order, optionally filtered to one status. An
    /// empty result is a valid outcome, not an error.
    pub fn list_tasks(&self, status: Option<TaskStatus>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.map_or(true, |s| task.status == s))
            .collect()
    }

    /// Clears the entire collection and persists. Destructive and
    /// irreversible; the calling layer obtains user confirmation first.
    pub fn delete_all_tasks(&mut self) -> Result<(), TaskError> {
        self.tasks.clear();
        self.persist()?;
        tracing::debug!("deleted all tasks");
        Ok(())
    }

    // Deriving the id from the collection (rather than a counter held
    // elsewhere) keeps assignment correct across reloads.
    fn next_id(&self) -> u64 {
        self.tasks
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    fn position(&self, id: u64) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound { id })
    }

    fn persist(&self) -> Result<(), TaskError> {
        Ok(self.store.save(&self.tasks)?)
    }
}
