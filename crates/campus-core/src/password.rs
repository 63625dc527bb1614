//! Password hashing backed by bcrypt.
//!
//! Digests are salted per call, so hashing the same password twice yields
//! different strings that both verify. The cost factor comes from
//! configuration; [`DEFAULT_COST`] matches the historical 10 rounds.

use anyhow::anyhow;

use crate::errors::AppError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 10;

/// Hashes `password` with the given bcrypt cost.
///
/// # Errors
///
/// Returns an internal error if bcrypt rejects the cost or fails to hash.
/// The message never reaches clients.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(password, cost)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Checks `password` against a stored bcrypt digest.
///
/// Returns `Ok(false)` on mismatch. A digest that is not valid bcrypt is an
/// internal error, not a mismatch.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, digest)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}
