//! Store abstraction used by the HTTP layer.

use async_trait::async_trait;
use campus_models::{NewStudent, Student, StudentCredentials, UpdateStudentDto};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("a student with this email already exists")]
    DuplicateEmail,

    #[error("storage error")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &error {
            if db_err.is_unique_violation() {
                return RepositoryError::DuplicateEmail;
            }
        }
        RepositoryError::Database(error)
    }
}

/// Access to student records.
///
/// Emails passed in are expected to be normalized already; implementations
/// still compare them case-insensitively.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Inserts a record and returns its public projection.
    async fn create(&self, student: NewStudent) -> Result<Student, RepositoryError>;

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Looks up the id and digest for a login attempt.
    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<StudentCredentials>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Student>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, RepositoryError>;

    /// Overwrites name, department and year. `None` when no row matched.
    async fn update(
        &self,
        id: Uuid,
        changes: UpdateStudentDto,
    ) -> Result<Option<Student>, RepositoryError>;

    /// Deletes a record and reports how many rows went away (0 or 1).
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;

    /// Deletes every record. Used by the operator CLI.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;

    /// Asks the store for its current time; doubles as a liveness probe.
    async fn now(&self) -> Result<DateTime<Utc>, RepositoryError>;
}
