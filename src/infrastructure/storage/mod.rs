//! Storage bootstrap: pool connection and embedded migrations

pub mod migrations;

use sqlx::postgres::PgPool;
use tracing::info;

use crate::domain::DomainError;

pub use migrations::{migrations, Migration, Migrator, PostgresMigrator};

/// Connect to PostgreSQL using the given connection URL
pub async fn connect(database_url: &str) -> Result<PgPool, DomainError> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPool::connect(database_url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

    info!("PostgreSQL connection established");

    Ok(pool)
}
