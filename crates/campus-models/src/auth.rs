//! Signup and login payloads.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Surrounding whitespace is dropped before the format check runs.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "alice@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    #[schema(example = "pw1")]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "department must be at most 100 characters"))]
    #[schema(example = "CS")]
    pub department: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 10, message = "year must be between 1 and 10"))]
    #[schema(example = 2)]
    pub year: Option<i32>,
}

/// No rules here: an empty or unknown email and an empty or wrong password
/// all fail the same way, as bad credentials.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice@x.com")]
    pub email: String,
    #[schema(example = "pw1")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
