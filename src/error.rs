use thiserror::Error;

/// Failures raised by the task engine.
///
/// Every variant is recoverable and user-presentable: the CLI prints the
/// `Display` form and exits nonzero without panicking. Storage *read*
/// problems never appear here; the store absorbs them by loading an empty
/// collection. Only a failed write (or a failed store open) surfaces as
/// [`TaskError::Storage`], since it means a mutation was not durably saved.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A required input field is missing or empty.
    #[error("{reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The referenced task id does not exist.
    #[error("Task with id {id} not found.")]
    NotFound { id: u64 },

    /// A status value outside the `todo | in-progress | done` set.
    #[error("Task status '{value}' is invalid.")]
    InvalidStatus { value: String },

    /// A mutation could not be written to disk.
    #[error("Could not save tasks: {0}")]
    Storage(#[from] anyhow::Error),
}

impl TaskError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
