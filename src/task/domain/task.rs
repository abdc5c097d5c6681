//! Task entity, workflow status, and partial-update merge policy.

use super::{ParseTaskStatusError, TaskId, TaskTitle};
use serde::{Deserialize, Serialize};

/// Task workflow status.
///
/// The serialized literal names are the external wire contract and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work on the task has not started.
    NotStarted,
    /// The task is being worked on.
    InProgress,
    /// The task has been completed.
    Completed,
    /// The task has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "NOT_STARTED" => Ok(Self::NotStarted),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task entity.
///
/// The identifier is assigned at construction and never changes; all other
/// fields mutate only through [`Task::apply_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted workflow status.
    pub status: TaskStatus,
}

/// Partial update to a task.
///
/// `None` fields mean "leave unchanged"; the identifier is never part of an
/// update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title, if supplied.
    pub title: Option<TaskTitle>,
    /// Replacement description, if supplied.
    pub description: Option<String>,
    /// Replacement status, if supplied.
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// Returns `true` when no field carries a replacement value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

impl Task {
    /// Creates a new task with a freshly assigned identifier.
    #[must_use]
    pub fn new(title: TaskTitle, description: Option<String>, status: TaskStatus) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            status,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Merges a partial update into this task.
    ///
    /// Each supplied field that differs from the current value replaces it;
    /// `None` fields are left unchanged. The identifier is never altered.
    pub fn apply_update(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title
            && title != self.title
        {
            self.title = title;
        }
        if let Some(description) = update.description
            && Some(description.as_str()) != self.description.as_deref()
        {
            self.description = Some(description);
        }
        if let Some(status) = update.status
            && status != self.status
        {
            self.status = status;
        }
    }
}
