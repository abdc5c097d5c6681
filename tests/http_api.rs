//! End-to-end HTTP tests for the task CRUD routes.
//!
//! Each test drives the axum router over the in-memory repository with
//! `tower::ServiceExt::oneshot`, asserting both status codes and response
//! bodies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use taskboard::api;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::services::TaskCrudService;
use tower::ServiceExt;

fn app() -> Router {
    let repository = Arc::new(InMemoryTaskRepository::new());
    api::router(Arc::new(TaskCrudService::new(repository)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router handles request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, value)
}

async fn create_task(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, "POST", "/api/v1/tasks", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

fn id_of(task: &Value) -> &str {
    task.get("id")
        .and_then(Value::as_str)
        .expect("task body carries an id")
}

#[tokio::test(flavor = "multi_thread")]
async fn list_is_empty_before_any_creation() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/v1/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_returned_with_generated_id() {
    let app = app();
    let created = create_task(
        &app,
        json!({"title": "Write report", "status": "NOT_STARTED"}),
    )
    .await;

    assert!(!id_of(&created).is_empty());
    assert_eq!(created.get("title"), Some(&json!("Write report")));
    assert_eq!(created.get("description"), Some(&Value::Null));
    assert_eq!(created.get("status"), Some(&json!("NOT_STARTED")));
}

#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_fetchable_by_id() {
    let app = app();
    let created = create_task(
        &app,
        json!({"title": "Write report", "description": "Q3", "status": "IN_PROGRESS"}),
    )
    .await;

    let uri = format!("/api/v1/tasks/{}", id_of(&created));
    let (status, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn supplied_id_is_ignored_on_creation() {
    let app = app();
    let created = create_task(
        &app,
        json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "title": "Write report",
            "status": "NOT_STARTED"
        }),
    )
    .await;
    assert_ne!(id_of(&created), "00000000-0000-0000-0000-000000000000");
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_title_is_rejected_with_409() {
    let app = app();
    create_task(
        &app,
        json!({"title": "Write report", "status": "NOT_STARTED"}),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/tasks",
        Some(json!({"title": "Write report", "status": "COMPLETED"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(
        body.get("error")
            .and_then(Value::as_str)
            .is_some_and(|message| message.contains("Write report"))
    );

    // The failed creation must not have added a second task.
    let (_, listed) = send(&app, "GET", "/api/v1/tasks", None).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_title_is_rejected_with_400() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/tasks",
        Some(json!({"status": "NOT_STARTED"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_status_is_rejected_with_400() {
    let app = app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/tasks",
        Some(json!({"title": "Write report"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_literal_is_rejected_with_400() {
    let app = app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/tasks",
        Some(json!({"title": "Write report", "status": "DONE"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_identifier_is_rejected_with_400() {
    let app = app();
    let (status, _) = send(&app, "GET", "/api/v1/tasks/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_id_returns_404() {
    let app = app();
    let uri = format!("/api/v1/tasks/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_merges_only_supplied_fields() {
    let app = app();
    let created = create_task(
        &app,
        json!({"title": "Write report", "status": "NOT_STARTED"}),
    )
    .await;
    let uri = format!("/api/v1/tasks/{}", id_of(&created));

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({"status": "COMPLETED"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated.get("id"), created.get("id"));
    assert_eq!(updated.get("title"), Some(&json!("Write report")));
    assert_eq!(updated.get("status"), Some(&json!("COMPLETED")));

    // The merge is persisted, not just echoed back.
    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_empty_payload_is_a_no_op() {
    let app = app();
    let created = create_task(
        &app,
        json!({"title": "Write report", "description": "Q3", "status": "NOT_STARTED"}),
    )
    .await;
    let uri = format!("/api/v1/tasks/{}", id_of(&created));

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_id_returns_404() {
    let app = app();
    let uri = format!("/api/v1/tasks/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "PUT", &uri, Some(json!({"status": "COMPLETED"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task() {
    let app = app();
    let created = create_task(
        &app,
        json!({"title": "Write report", "status": "NOT_STARTED"}),
    )
    .await;
    let uri = format!("/api/v1/tasks/{}", id_of(&created));

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_id_returns_404() {
    let app = app();
    let uri = format!("/api/v1/tasks/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn report_scenario_end_to_end() {
    let app = app();

    let created = create_task(
        &app,
        json!({"title": "Write report", "status": "NOT_STARTED"}),
    )
    .await;
    assert_eq!(created.get("description"), Some(&Value::Null));
    assert_eq!(created.get("status"), Some(&json!("NOT_STARTED")));

    let uri = format!("/api/v1/tasks/{}", id_of(&created));
    let (status, updated) = send(&app, "PUT", &uri, Some(json!({"status": "COMPLETED"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated.get("id"), created.get("id"));
    assert_eq!(updated.get("title"), Some(&json!("Write report")));
    assert_eq!(updated.get("status"), Some(&json!("COMPLETED")));

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/tasks",
        Some(json!({"title": "Write report", "status": "NOT_STARTED"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
