use axum::{Json, extract::State};
use campus_core::{AppError, ErrorResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

pub const BANNER: &str = "Smart Campus Connect API running";

#[derive(Debug, Serialize, ToSchema)]
pub struct DbTimeResponse {
    pub now: DateTime<Utc>,
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    ),
    tag = "Health"
)]
pub async fn banner() -> &'static str {
    BANNER
}

/// Round trip to the store
#[utoipa::path(
    get,
    path = "/test-db",
    responses(
        (status = 200, description = "Store reachable", body = DbTimeResponse),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "Health"
)]
pub async fn test_db(State(state): State<AppState>) -> Result<Json<DbTimeResponse>, AppError> {
    let now = state.students.now().await?;
    Ok(Json(DbTimeResponse { now }))
}
