//! Taskboard server binary.
//!
//! Wires configuration, the `PostgreSQL` connection pool, the task CRUD
//! service, and the axum router, then serves HTTP until the process exits.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::sync::Arc;
use taskboard::api;
use taskboard::config::ServerConfig;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::services::TaskCrudService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;
    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = Arc::new(TaskCrudService::new(repository));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, api::router(service)).await?;
    Ok(())
}
