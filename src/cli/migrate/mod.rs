//! Migrate command - applies or reverts database migrations

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{self, Migrator, PostgresMigrator};

use super::MigrateArgs;

/// Apply pending migrations, or revert the last one with `--revert`
pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = storage::connect(&config.database_url()).await?;
    let migrator = PostgresMigrator::new(pool);

    if args.revert {
        migrator.revert().await?;
    } else {
        migrator.run().await?;
    }

    match migrator.version().await? {
        Some(version) => info!("Schema at version {}", version),
        None => info!("Schema has no applied migrations"),
    }

    Ok(())
}
