use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use campus_auth::{Claims, verify_token};
use campus_config::JwtConfig;
use campus_core::AppError;
use campus_observability::track_token_rejected;
use tracing::warn;
use uuid::Uuid;

use crate::state::AppState;

pub const ACCESS_DENIED: &str = "Access denied";
pub const INVALID_TOKEN: &str = "Invalid token";

/// The identity behind a verified token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub student_id: Uuid,
    pub claims: Claims,
}

fn invalid_token(reason: &'static str) -> AppError {
    warn!(reason, "Rejected bearer token");
    track_token_rejected(reason);
    AppError::forbidden(INVALID_TOKEN)
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
///
/// A missing or blank header is 401. A header that is present but unusable
/// is 403.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|value| !value.as_bytes().trim_ascii().is_empty())
        .ok_or_else(|| AppError::unauthorized(ACCESS_DENIED))?;

    let value = value.to_str().map_err(|_| invalid_token("non_utf8_header"))?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| invalid_token("missing_token"))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(invalid_token("wrong_scheme"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(invalid_token("missing_token"));
    }

    Ok(token)
}

/// Verifies the bearer credential in `headers`.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)?;

    let claims = verify_token(token, jwt_config).map_err(|e| invalid_token(e.reason()))?;
    let student_id = claims.subject().map_err(|e| invalid_token(e.reason()))?;

    Ok(AuthUser { student_id, claims })
}

/// Route layer for protected routes. Rejects before the handler runs, or
/// stores the [`AuthUser`] for it.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.config.jwt)?;
    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.config.jwt)
    }
}
