pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;

pub use repository::SqliteTodoRepository;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the pool, creating the database file if needed, and brings the
/// schema up to date.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;
    info!("connected to {}", config.database_url);

    MIGRATOR.run(&pool).await?;
    info!("database migrations applied");

    Ok(pool)
}
