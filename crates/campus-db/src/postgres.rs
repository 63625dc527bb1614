//! Postgres-backed student store.

use async_trait::async_trait;
use campus_models::{NewStudent, Student, StudentCredentials, UpdateStudentDto};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::repository::{RepositoryError, StudentRepository};

#[derive(Debug, Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    #[instrument(skip(self, student), fields(email = %student.email))]
    async fn create(&self, student: NewStudent) -> Result<Student, RepositoryError> {
        let created = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (id, name, email, password, department, year)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, department, year
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.password_digest)
        .bind(&student.department)
        .bind(student.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM students WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<StudentCredentials>, RepositoryError> {
        let credentials = sqlx::query_as::<_, StudentCredentials>(
            "SELECT id, email, password FROM students WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email, department, year
            FROM students
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, RepositoryError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, department, year FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: Uuid,
        changes: UpdateStudentDto,
    ) -> Result<Option<Student>, RepositoryError> {
        let updated = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = $1, department = $2, year = $3
            WHERE id = $4
            RETURNING id, name, email, department, year
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.department)
        .bind(changes.year)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM students")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn now(&self) -> Result<DateTime<Utc>, RepositoryError> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;

        Ok(now)
    }
}
