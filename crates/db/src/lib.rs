//! Showtime data access layer.
//!
//! Documents live in one JSONB table per [`Collection`]. Handlers talk to a
//! [`DocumentStore`] trait object so the PostgreSQL backend and the
//! in-memory backend are interchangeable; the per-collection repositories
//! in [`repositories`] add the route-level matching rules on top.

pub mod collection;
pub mod models;
pub mod repositories;
pub mod store;

pub use collection::Collection;
pub use store::memory::InMemoryDocumentStore;
pub use store::postgres::PgDocumentStore;
pub use store::{DocumentStore, InsertOutcome, StoreError};

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
