use crate::env::lookup;

pub const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4317";
pub const DEFAULT_LOG_DIR: &str = "storage/logs";

/// Logging and telemetry settings. Never fails: every field has a default,
/// so logging can be initialized before the rest of the config is validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Toggles metrics collection and OTLP export. Console/file logging is always on.
    pub enabled: bool,
    pub otlp_endpoint: String,
    pub log_dir: String,
    pub log_level: String,
    pub environment: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            otlp_endpoint: DEFAULT_OTLP_ENDPOINT.to_string(),
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            enabled: lookup("OBSERVABILITY_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.enabled),
            otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").unwrap_or(defaults.otlp_endpoint),
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0"
}
