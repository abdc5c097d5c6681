//! Service layer for task CRUD operations.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus, TaskTitle, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub const fn new(title: TaskTitle, status: TaskStatus) -> Self {
        Self {
            title,
            description: None,
            status,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the requested title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }
}

/// Service-level errors for task CRUD operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A task with the requested title already exists.
    #[error("a task titled '{0}' already exists")]
    AlreadyExists(String),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    /// Lifts repository errors into the service taxonomy.
    ///
    /// Duplicate-title violations surface even when the service-level
    /// pre-check passed (the check-then-insert window), so they map to
    /// [`TaskServiceError::AlreadyExists`] here rather than leaking as
    /// storage failures.
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::DuplicateTitle(title) => Self::AlreadyExists(title),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task CRUD service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
#[derive(Clone)]
pub struct TaskCrudService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskCrudService<R>
where
    R: TaskRepository,
{
    /// Creates a new task CRUD service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all stored tasks in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task carries the
    /// identifier.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Creates a new task, enforcing title uniqueness.
    ///
    /// The title lookup and the insert are not atomic; the storage adapter's
    /// unique index closes the race and its violation also surfaces as
    /// [`TaskServiceError::AlreadyExists`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::AlreadyExists`] when the title is taken,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let existing = self.repository.find_by_title(&request.title).await?;
        if existing.is_some() {
            return Err(TaskServiceError::AlreadyExists(request.title.into_inner()));
        }

        let task = Task::new(request.title, request.description, request.status);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Merges a partial update into an existing task and persists the result.
    ///
    /// Fields absent from the update are left unchanged; the identifier never
    /// changes. The merged task is durably written before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task carries the
    /// identifier, [`TaskServiceError::AlreadyExists`] when a replacement
    /// title collides with another task, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_task(&self, id: TaskId, update: TaskUpdate) -> TaskServiceResult<Task> {
        let mut task = self.get_task(id).await?;
        task.apply_update(update);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task carries the
    /// identifier, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete_by_id(id).await?)
    }
}
