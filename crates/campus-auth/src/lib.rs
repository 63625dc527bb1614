//! # Campus Auth
//!
//! Token Issuer/Verifier for the Smart Campus API.
//!
//! Tokens are stateless HS256 JWTs that embed only the student id (`sub`)
//! plus issued-at and expiry timestamps. There is no server-side session
//! table, so a token stays valid until it expires.
//!
//! - [`claims`]: the token payload
//! - [`jwt`]: issuing and verifying tokens
//!
//! # Example
//!
//! ```ignore
//! use campus_auth::{create_access_token, verify_token};
//! use campus_config::JwtConfig;
//!
//! let token = create_access_token(student_id, &jwt_config)?;
//! let claims = verify_token(&token, &jwt_config)?;
//! assert_eq!(claims.subject()?, student_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TokenError, create_access_token, create_access_token_at, verify_token};
