//! # Campus DB
//!
//! The Credential Store: a single `students` table in Postgres accessed
//! through parameterized queries.
//!
//! - [`init_db_pool`] connects once at startup; failure is fatal to boot.
//! - [`run_migrations`] applies the embedded schema from `migrations/`.
//! - [`StudentRepository`] is the seam the HTTP layer talks to;
//!   [`PgStudentRepository`] is the production implementation and
//!   `InMemoryStudentRepository` and the generated `MockStudentRepository`
//!   (feature `test-utils`) back tests.
//!
//! Every query is a single autocommit statement. The signup existence check
//! and insert are not atomic; the unique index on `LOWER(email)` rejects the
//! loser of a race, surfaced as [`RepositoryError::DuplicateEmail`].
//!
//! # Example
//!
//! ```ignore
//! use campus_db::{PgStudentRepository, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&config.database).await?;
//! run_migrations(&pool).await?;
//! let students = PgStudentRepository::new(pool);
//! ```

pub mod postgres;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use campus_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use postgres::PgStudentRepository;
pub use repository::{RepositoryError, StudentRepository};
pub use sqlx::PgPool;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryStudentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockStudentRepository;

/// Connects a Postgres pool using the boot-time configuration.
///
/// # Errors
///
/// Returns the driver error if the server cannot be reached or rejects the
/// credentials. Callers treat this as fatal.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Applies the schema migrations bundled at compile time.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
