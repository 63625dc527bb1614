//! # Campus Client
//!
//! What the mobile app does, as a library: log in, keep the issued token in
//! local storage, attach it to every student call, and drop it on logout.
//!
//! There is no refresh. Once the token expires every call fails with
//! [`ClientError::InvalidToken`] until the user logs in again.
//!
//! ```ignore
//! use campus_client::{CampusClient, ClientConfig, FileTokenStore, StudentForm};
//!
//! let store = FileTokenStore::new(app_data_dir);
//! let mut client = CampusClient::new(ClientConfig::from_env(), store);
//!
//! client.login("alice@x.com", "pw1").await?;
//! for student in client.list_students().await? {
//!     println!("{} <{}>", student.name, student.email);
//! }
//! client.logout()?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod store;

pub use client::{CampusClient, DEFAULT_STUDENT_PASSWORD, Screen, StudentForm};
pub use config::ClientConfig;
pub use error::ClientError;
pub use store::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};
