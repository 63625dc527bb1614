use axum::{Json, extract::State, http::StatusCode};
use campus_core::{AppError, ErrorResponse};
use campus_models::{LoginRequest, LoginResponse, SignupRequest, Student};
use tracing::instrument;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new student
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Email already registered or invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = AuthService::signup(state.students.as_ref(), &state.config, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials or invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = AuthService::login(state.students.as_ref(), &state.config, dto).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
