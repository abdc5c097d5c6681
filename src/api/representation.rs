//! Wire representation of tasks and pure conversion functions.

use crate::task::{
    domain::{Task, TaskDomainError, TaskStatus, TaskTitle, TaskUpdate},
    services::CreateTaskRequest,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JSON representation of a task.
///
/// The same shape serves responses, creation payloads, and partial-update
/// payloads; on input, absent and `null` fields are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRepresentation {
    /// Task identifier; ignored on creation, never updatable.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Workflow status literal.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Converts a domain task into its wire representation.
#[must_use]
pub fn to_representation(task: &Task) -> TaskRepresentation {
    TaskRepresentation {
        id: Some(task.id().into_inner()),
        title: Some(task.title().as_str().to_owned()),
        description: task.description().map(ToOwned::to_owned),
        status: Some(task.status()),
    }
}

/// Converts a creation payload into a service request.
///
/// Any identifier in the payload is discarded; the service assigns one.
///
/// # Errors
///
/// Returns [`TaskDomainError::MissingTitle`] or
/// [`TaskDomainError::MissingStatus`] when a required field is absent, or
/// [`TaskDomainError::EmptyTitle`] when the title is blank.
pub fn to_create_request(
    representation: TaskRepresentation,
) -> Result<CreateTaskRequest, TaskDomainError> {
    let title = representation.title.ok_or(TaskDomainError::MissingTitle)?;
    let title = TaskTitle::new(title)?;
    let status = representation
        .status
        .ok_or(TaskDomainError::MissingStatus)?;

    let mut request = CreateTaskRequest::new(title, status);
    if let Some(description) = representation.description {
        request = request.with_description(description);
    }
    Ok(request)
}

/// Converts a partial-update payload into a domain update.
///
/// Absent fields mean "leave unchanged"; a supplied title must still be
/// non-empty.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyTitle`] when a supplied title is blank.
pub fn to_update(representation: TaskRepresentation) -> Result<TaskUpdate, TaskDomainError> {
    let title = representation.title.map(TaskTitle::new).transpose()?;
    Ok(TaskUpdate {
        title,
        description: representation.description,
        status: representation.status,
    })
}
