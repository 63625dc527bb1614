use campus_core::AppError;
use campus_db::StudentRepository;
use campus_models::{Student, UpdateStudentDto};
use tracing::{debug, instrument};
use uuid::Uuid;

pub const STUDENT_NOT_FOUND: &str = "Student not found";

/// Ids come straight from the URL. Anything that is not a UUID cannot name
/// a stored record, so it is treated as absent rather than as a bad request.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(students))]
    pub async fn list(students: &dyn StudentRepository) -> Result<Vec<Student>, AppError> {
        Ok(students.list().await?)
    }

    #[instrument(skip(students))]
    pub async fn get(students: &dyn StudentRepository, id: &str) -> Result<Student, AppError> {
        let Some(id) = parse_id(id) else {
            return Err(AppError::not_found(STUDENT_NOT_FOUND));
        };

        students
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(STUDENT_NOT_FOUND))
    }

    #[instrument(skip(students, changes))]
    pub async fn update(
        students: &dyn StudentRepository,
        id: &str,
        changes: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let Some(id) = parse_id(id) else {
            return Err(AppError::not_found(STUDENT_NOT_FOUND));
        };

        students
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(STUDENT_NOT_FOUND))
    }

    /// Deletes without checking existence first.
    #[instrument(skip(students))]
    pub async fn delete(students: &dyn StudentRepository, id: &str) -> Result<(), AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };

        let removed = students.delete(id).await?;
        debug!(removed, "Delete finished");

        Ok(())
    }
}
