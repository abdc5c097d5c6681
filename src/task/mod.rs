//! Task record management for Taskboard.
//!
//! This module implements the five CRUD operations over task records:
//! listing all tasks, fetching one by identifier, creating a task with a
//! unique title, merging a partial update into an existing task, and
//! deleting a task by identifier. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
