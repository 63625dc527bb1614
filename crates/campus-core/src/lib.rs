//! # Campus Core
//!
//! Foundational types shared by every Smart Campus crate:
//!
//! - [`errors`]: the application error taxonomy and its HTTP rendering
//! - [`password`]: bcrypt hashing and verification
//! - [`email`]: canonical email normalization
//!
//! # Example
//!
//! ```ignore
//! use campus_core::{AppError, hash_password, verify_password, normalize_email};
//!
//! let digest = hash_password("pw1", 10)?;
//! assert!(verify_password("pw1", &digest)?);
//! assert_eq!(normalize_email("  Alice@X.com "), "alice@x.com");
//! ```

pub mod email;
pub mod errors;
pub mod password;

// Re-export commonly used items at crate root
pub use email::normalize_email;
pub use errors::{AppError, ErrorResponse};
pub use password::{DEFAULT_COST, hash_password, verify_password};
