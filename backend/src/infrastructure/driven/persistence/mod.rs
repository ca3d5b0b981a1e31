// Postgres driven adapters (sqlx, runtime-checked queries)

mod db_types;
pub mod identity_repository;
pub mod complaint_repository;
pub mod auth_backend;

pub use identity_repository::PostgresIdentityRepository;
pub use complaint_repository::PostgresComplaintRepository;
pub use auth_backend::PostgresAuthBackend;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::application::ports::StoreError;

pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(db_error)?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("migration failed: {}", e)))?;
    Ok(pool)
}

pub(crate) fn db_error(e: sqlx::Error) -> StoreError {
    tracing::error!(error = %e, "database error");
    StoreError::Unavailable(format!("Database error: {}", e))
}
