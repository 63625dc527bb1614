use axum::{
    Json,
    extract::{Path, State},
};
use campus_core::{AppError, ErrorResponse};
use campus_models::{MessageResponse, Student, UpdateStudentDto};
use tracing::instrument;

use super::service::StudentService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = Vec<Student>),
        (status = 401, description = "No Authorization header", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, auth_user), fields(caller = %auth_user.student_id))]
pub async fn get_students(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::list(state.students.as_ref()).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 401, description = "No Authorization header", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, auth_user), fields(caller = %auth_user.student_id))]
pub async fn get_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get(state.students.as_ref(), &id).await?;
    Ok(Json(student))
}

/// Overwrite name, department and year
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 401, description = "No Authorization header", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = %auth_user.student_id))]
pub async fn update_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update(state.students.as_ref(), &id, dto).await?;
    Ok(Json(student))
}

/// Delete a student. Succeeds even when nothing matched.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Deletion confirmed", body = MessageResponse),
        (status = 401, description = "No Authorization header", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, auth_user), fields(caller = %auth_user.student_id))]
pub async fn delete_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    StudentService::delete(state.students.as_ref(), &id).await?;

    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}
