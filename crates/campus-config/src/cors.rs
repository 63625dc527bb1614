use crate::env::lookup;

/// Allowed browser origins. An empty list means any origin is accepted,
/// which is what the mobile and web clients need during development.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_value(lookup("ALLOWED_ORIGINS"))
    }

    pub fn from_value(value: Option<String>) -> Self {
        let allowed_origins = value
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}
