//! JWT payload carried by access tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jwt::TokenError;

/// Claims embedded in every access token.
///
/// Only the subject id is carried; name, email and the rest of the record are
/// looked up from the store when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Student id (subject claim)
    pub sub: String,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Fails with [`TokenError::Signing`] if the expiry does not fit in an `i64`.
    pub fn new(subject: Uuid, issued_at: i64, ttl_seconds: i64) -> Result<Self, TokenError> {
        let exp = issued_at
            .checked_add(ttl_seconds)
            .ok_or_else(|| TokenError::Signing("token expiry out of range".to_string()))?;

        Ok(Self {
            sub: subject.to_string(),
            iat: issued_at,
            exp,
        })
    }

    /// The subject as a typed id. A signed token whose subject is not a UUID
    /// is treated as malformed.
    pub fn subject(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Malformed)
    }
}
