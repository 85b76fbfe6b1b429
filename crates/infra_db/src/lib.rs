//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the expense-splitting
//! service, implementing the domain's store ports with SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each domain store port has one
//! repository implementation that hides the database details. Repositories
//! resolve exactly what the port contract promises eagerly - nothing is
//! lazily loaded behind the domain's back.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgUserStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/split")).await?;
//! let users = PgUserStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{PgBillStore, PgGroupStore, PgTransactionStore, PgUserStore};

/// Applies the embedded migrations to the target database
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    tracing::info!("Database ready");
    Ok(())
}
