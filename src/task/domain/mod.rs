//! Domain model for task records.
//!
//! The task domain models the persisted task entity, its workflow status,
//! validated title values, and the partial-update merge policy, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskStatus, TaskUpdate};
