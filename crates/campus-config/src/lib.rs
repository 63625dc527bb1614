//! # Campus Config
//!
//! Process-wide configuration for the Smart Campus API.
//!
//! [`AppConfig`] is built once at startup from environment variables and then
//! passed by reference (inside the router state) to everything that needs it.
//! Required values that are missing or malformed produce a [`ConfigError`] so
//! the server fails at boot instead of at request time.
//!
//! - [`jwt`]: token signing secret and TTL
//! - [`password`]: bcrypt cost factor
//! - [`database`]: store connection string and pool size
//! - [`server`]: listen address
//! - [`cors`]: allowed origins
//! - [`observability`]: logging, metrics and trace export toggles
//!
//! # Example
//!
//! ```ignore
//! use campus_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.address());
//! ```

pub mod cors;
pub mod database;
pub mod env;
pub mod jwt;
pub mod observability;
pub mod password;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use env::ConfigError;
pub use jwt::JwtConfig;
pub use observability::ObservabilityConfig;
pub use password::PasswordConfig;
pub use server::ServerConfig;

/// Everything the server needs, loaded once.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Loads and validates every section from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            password: PasswordConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }
}
