//! # Tavolo DB
//!
//! Postgres pool initialization and embedded migrations for the Tavolo API.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

/// Embedded schema migrations, applied on startup.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connects to Postgres and brings the schema up to date.
///
/// The returned pool is cheaply cloneable and is shared through the
/// application state.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    MIGRATOR.run(&pool).await?;
    info!("database pool initialized");
    Ok(pool)
}

// Re-export PgPool for convenience
pub use sqlx::PgPool as Pool;
