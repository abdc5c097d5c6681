//! HTTP surface for the task CRUD service.
//!
//! The API layer owns the wire representation of tasks, the mapping from
//! classified service errors to HTTP status codes, and the axum router
//! exposing the five CRUD routes under `/api/v1/tasks`.

mod error;
mod representation;
mod routes;

pub use error::{ApiError, ErrorBody};
pub use representation::{TaskRepresentation, to_create_request, to_representation, to_update};
pub use routes::router;
