//! Schema-level checks on task input fields.
//!
//! Validation is pure: it never touches storage and never mutates the
//! payload. A failure names the offending field and carries a message
//! suitable for printing to the user as-is.

use crate::error::TaskError;
use crate::models::{CreateTaskInput, UpdateTaskInput};

/// Checks a create payload: `name` and `description` must both be present
/// and non-empty. Whitespace-only values count as empty.
pub fn validate_add(input: &CreateTaskInput) -> Result<(), TaskError> {
    if input.name.trim().is_empty() {
        return Err(TaskError::validation(
            "name",
            "Task name is required. Please provide a name for the task.",
        ));
    }
    if input.description.trim().is_empty() {
        return Err(TaskError::validation(
            "description",
            "Task description is required. Please provide a description for the task.",
        ));
    }
    Ok(())
}

/// Checks an update payload: absent fields mean "leave unchanged", but a
/// field that is provided must be non-empty.
pub fn validate_update(input: &UpdateTaskInput) -> Result<(), TaskError> {
    if matches!(&input.name, Some(name) if name.trim().is_empty()) {
        return Err(TaskError::validation(
            "name",
            "Task name cannot be empty. Omit the field to keep the current name.",
        ));
    }
    if matches!(&input.description, Some(desc) if desc.trim().is_empty()) {
        return Err(TaskError::validation(
            "description",
            "Task description cannot be empty. Omit the field to keep the current description.",
        ));
    }
    Ok(())
}
