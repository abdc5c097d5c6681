//! Taskboard: a minimal task-record CRUD service.
//!
//! This crate exposes five REST operations over task records — list, get,
//! create, update, and delete — backed by a relational store, with a single
//! business rule: task titles are unique.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`api`]: HTTP surface, wire representation, and error mapping
//! - [`task`]: Task domain model, repository port, and storage adapters
//! - [`config`]: Environment-driven server configuration

pub mod api;
pub mod config;
pub mod task;
