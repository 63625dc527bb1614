pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root, without a trailing slash.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `CAMPUS_API_URL`, falling back to the local development server.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("CAMPUS_API_URL").ok())
    }

    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(ClientConfig::from_value(None).base_url, "http://localhost:5000");
        assert_eq!(
            ClientConfig::from_value(Some("  ".to_string())).base_url,
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ClientConfig::from_value(Some("http://10.0.0.2:5000/".to_string()));
        assert_eq!(config.url("/students"), "http://10.0.0.2:5000/students");
    }
}
