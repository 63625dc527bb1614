//! In-process student store for tests.
//!
//! Mirrors the Postgres behavior that callers rely on: case-insensitive
//! unique emails, insertion-ordered listing, null-overwriting updates.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use campus_models::{NewStudent, Student, StudentCredentials, UpdateStudentDto};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::repository::{RepositoryError, StudentRepository};

#[derive(Debug, Clone)]
struct StoredStudent {
    student: Student,
    password_digest: String,
}

#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    rows: Mutex<Vec<StoredStudent>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The raw stored digest for an email, for asserting on what was persisted.
    pub fn stored_digest(&self, email: &str) -> Option<String> {
        self.rows()
            .iter()
            .find(|row| row.student.email.eq_ignore_ascii_case(email))
            .map(|row| row.password_digest.clone())
    }

    fn rows(&self) -> MutexGuard<'_, Vec<StoredStudent>> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, student: NewStudent) -> Result<Student, RepositoryError> {
        let mut rows = self.rows();

        if rows
            .iter()
            .any(|row| row.student.email.eq_ignore_ascii_case(&student.email))
        {
            return Err(RepositoryError::DuplicateEmail);
        }

        let created = Student {
            id: Uuid::new_v4(),
            name: student.name,
            email: student.email,
            department: student.department,
            year: student.year,
        };

        rows.push(StoredStudent {
            student: created.clone(),
            password_digest: student.password_digest,
        });

        Ok(created)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .rows()
            .iter()
            .any(|row| row.student.email.eq_ignore_ascii_case(email)))
    }

    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<StudentCredentials>, RepositoryError> {
        Ok(self
            .rows()
            .iter()
            .find(|row| row.student.email.eq_ignore_ascii_case(email))
            .map(|row| StudentCredentials {
                id: row.student.id,
                email: row.student.email.clone(),
                password_digest: row.password_digest.clone(),
            }))
    }

    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.rows().iter().map(|row| row.student.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, RepositoryError> {
        Ok(self
            .rows()
            .iter()
            .find(|row| row.student.id == id)
            .map(|row| row.student.clone()))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: UpdateStudentDto,
    ) -> Result<Option<Student>, RepositoryError> {
        let mut rows = self.rows();

        Ok(rows
            .iter_mut()
            .find(|row| row.student.id == id)
            .map(|row| {
                row.student.name = changes.name;
                row.student.department = changes.department;
                row.student.year = changes.year;
                row.student.clone()
            }))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|row| row.student.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut rows = self.rows();
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn now(&self) -> Result<DateTime<Utc>, RepositoryError> {
        Ok(Utc::now())
    }
}
