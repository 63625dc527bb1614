use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No token is stored. Raised before any request is sent.
    #[error("not logged in")]
    NotLoggedIn,

    /// The server saw no credential (401).
    #[error("access denied")]
    AccessDenied,

    /// The stored token was rejected (403), usually because it expired.
    #[error("invalid or expired token")]
    InvalidToken,

    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success response, with the server's `error` message.
    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("token storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
