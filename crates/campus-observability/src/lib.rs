//! Campus Observability
//!
//! Logging, distributed tracing and Prometheus metrics for the API server.
//!
//! Everything here is compiled in by the `observability` feature (on by
//! default). At runtime the `OBSERVABILITY_ENABLED` flag in
//! [`ObservabilityConfig`](campus_config::ObservabilityConfig) decides whether
//! OTLP export and the metrics recorder are started; console logging is
//! always available through [`basic_logging`].
//!
//! ```no_run
//! use campus_config::ObservabilityConfig;
//! use campus_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing(&ObservabilityConfig::from_env())?;
//!     // ... serve ...
//!     shutdown_tracer().await;
//!     Ok(())
//! }
//! ```

pub mod basic_logging;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use self::logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use self::metrics::{
    init_metrics, metrics_middleware, metrics_router, track_login_failure, track_login_success,
    track_student_created, track_token_issued, track_token_rejected,
};
#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

// No-op stubs when observability is compiled out
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};
    use campus_config::ObservabilityConfig;

    /// Stand-in for the Prometheus handle so callers keep one signature.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    pub fn init_tracing(config: &ObservabilityConfig) -> anyhow::Result<()> {
        super::init_basic_console_logging(&config.log_level);
        Ok(())
    }

    pub async fn shutdown_tracer() {}

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_metrics(_config: &ObservabilityConfig) -> anyhow::Result<Option<PrometheusHandle>> {
        Ok(None)
    }

    pub fn metrics_router<S>(_handle: PrometheusHandle) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
    }

    pub fn track_student_created() {}
    pub fn track_login_success() {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_token_issued() {}
    pub fn track_token_rejected(_reason: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
