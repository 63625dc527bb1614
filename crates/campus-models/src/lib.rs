//! # Campus Models
//!
//! Data structures shared by the server, the store and the clients.
//!
//! - [`students`]: the public student projection, credential row and write DTOs
//! - [`auth`]: signup/login payloads and responses
//!
//! The password digest only ever appears in [`StudentCredentials`], which
//! does not implement `Serialize`; every response body is built from
//! [`Student`].

pub mod auth;
pub mod students;

// Re-export commonly used types at crate root
pub use auth::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};
pub use students::{NewStudent, Student, StudentCredentials, UpdateStudentDto};
