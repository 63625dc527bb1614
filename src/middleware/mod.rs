//! Request middleware.
//!
//! - [`auth`]: bearer-token authentication for the `/students` routes
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and stores an [`auth::AuthUser`]
//!    in the request extensions, or rejects with 401/403
//! 3. Handlers take `AuthUser` as an argument to learn who is calling

pub mod auth;
