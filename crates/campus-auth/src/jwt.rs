//! Token issuance and verification.
//!
//! Verification distinguishes why a token was rejected ([`TokenError`]) so
//! the cause can be logged and counted. Callers facing the network collapse
//! every variant into the same "Invalid token" response.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use campus_config::JwtConfig;

use crate::claims::Claims;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl TokenError {
    /// Short label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Expired => "expired",
            TokenError::Signing(_) => "signing",
        }
    }
}

/// Issues a token for `student_id`, valid for the configured TTL from now.
///
/// # Errors
///
/// Returns [`TokenError::Signing`] if the expiry overflows or encoding fails.
pub fn create_access_token(student_id: Uuid, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    create_access_token_at(student_id, Utc::now().timestamp(), jwt_config)
}

/// Issues a token as if it had been created at `issued_at` (Unix seconds).
pub fn create_access_token_at(
    student_id: Uuid,
    issued_at: i64,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    let claims = Claims::new(student_id, issued_at, jwt_config.access_token_expiry)?;

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Checks the signature and expiry of `token` and returns its claims.
///
/// Expiry is enforced with zero leeway.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    claims.subject()?;

    Ok(claims)
}
