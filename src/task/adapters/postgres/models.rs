//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Unique task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Workflow status literal.
    pub status: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Unique task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Workflow status literal.
    pub status: String,
}

/// Changeset applied when persisting a merged task.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description; `None` writes SQL NULL.
    pub description: Option<String>,
    /// Replacement status literal.
    pub status: String,
}
