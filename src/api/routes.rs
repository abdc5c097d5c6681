//! Axum router and handlers for the five task CRUD routes.

use super::error::ApiError;
use super::representation::{
    TaskRepresentation, to_create_request, to_representation, to_update,
};
use crate::task::{domain::TaskId, ports::TaskRepository, services::TaskCrudService};
use axum::Json;
use axum::Router;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use std::sync::Arc;
use uuid::Uuid;

/// Builds the task CRUD router over the given service.
pub fn router<R>(service: Arc<TaskCrudService<R>>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/api/v1/tasks", get(list_tasks::<R>).post(create_task::<R>))
        .route(
            "/api/v1/tasks/{id}",
            get(get_task::<R>)
                .put(update_task::<R>)
                .delete(delete_task::<R>),
        )
        .with_state(service)
}

/// Unwraps a path-parameter extraction, mapping malformed identifiers to 400.
fn task_id(id: Result<Path<Uuid>, PathRejection>) -> Result<TaskId, ApiError> {
    let Path(raw) = id.map_err(ApiError::validation)?;
    Ok(TaskId::from_uuid(raw))
}

/// Unwraps a JSON body extraction, mapping unreadable payloads to 400.
fn payload(
    body: Result<Json<TaskRepresentation>, JsonRejection>,
) -> Result<TaskRepresentation, ApiError> {
    let Json(representation) = body.map_err(ApiError::validation)?;
    Ok(representation)
}

/// GET /api/v1/tasks
async fn list_tasks<R>(
    State(service): State<Arc<TaskCrudService<R>>>,
) -> Result<Json<Vec<TaskRepresentation>>, ApiError>
where
    R: TaskRepository,
{
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks.iter().map(to_representation).collect()))
}

/// GET /api/v1/tasks/{id}
async fn get_task<R>(
    State(service): State<Arc<TaskCrudService<R>>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TaskRepresentation>, ApiError>
where
    R: TaskRepository,
{
    let id = task_id(id)?;
    let task = service.get_task(id).await?;
    Ok(Json(to_representation(&task)))
}

/// POST /api/v1/tasks
async fn create_task<R>(
    State(service): State<Arc<TaskCrudService<R>>>,
    body: Result<Json<TaskRepresentation>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    R: TaskRepository,
{
    let request = to_create_request(payload(body)?).map_err(ApiError::validation)?;
    let task = service.create_task(request).await?;
    tracing::info!(id = %task.id(), "task created");
    Ok((StatusCode::CREATED, Json(to_representation(&task))))
}

/// PUT /api/v1/tasks/{id}
async fn update_task<R>(
    State(service): State<Arc<TaskCrudService<R>>>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<TaskRepresentation>, JsonRejection>,
) -> Result<Json<TaskRepresentation>, ApiError>
where
    R: TaskRepository,
{
    let id = task_id(id)?;
    let update = to_update(payload(body)?).map_err(ApiError::validation)?;
    let task = service.update_task(id, update).await?;
    tracing::info!(id = %task.id(), "task updated");
    Ok(Json(to_representation(&task)))
}

/// DELETE /api/v1/tasks/{id}
async fn delete_task<R>(
    State(service): State<Arc<TaskCrudService<R>>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
{
    let id = task_id(id)?;
    service.delete_task(id).await?;
    tracing::info!(%id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
