//! Postgres pool setup.
//!
//! DESIGN
//! ======
//! One shared pool for the whole process, sized by `DB_MAX_CONNECTIONS`.
//! Embedded migrations run on every start and are a no-op once applied, so
//! a fresh database and a restarted one take the same path. Nothing serves
//! requests until the schema is in place.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

fn max_connections() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Connect the shared pool and bring the schema up to date.
///
/// # Errors
///
/// Fails when the database is unreachable or a migration cannot be applied.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections())
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
