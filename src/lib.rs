//! Cadastro
//!
//! A minimal user-management web application: one `users` table with
//! create, list, edit and delete operations, served as HTML forms.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::storage::{self, Migrator, PostgresMigrator};
use infrastructure::user::{Argon2Hasher, PostgresUserRepository, UserService};

/// Create the application state with the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state: connect to PostgreSQL, apply pending
/// migrations and wire the user service
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = storage::connect(&config.database_url()).await?;

    PostgresMigrator::new(pool.clone()).run().await?;

    let user_repository = Arc::new(PostgresUserRepository::new(pool));
    let password_hasher = Arc::new(Argon2Hasher::new());
    let user_service = Arc::new(UserService::new(user_repository, password_hasher));

    Ok(AppState::new(user_service))
}
