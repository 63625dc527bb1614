//! Prometheus metrics.
//!
//! The `metrics` macros are no-ops until a recorder is installed, so the
//! tracking helpers cost nothing when [`init_metrics`] was never called.

use std::time::{Duration, Instant};

use anyhow::Context;
use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use campus_config::ObservabilityConfig;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

const REQUEST_DURATION_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Installs the global Prometheus recorder and its upkeep task.
///
/// Returns `None` when observability is disabled. Must be called from inside
/// a Tokio runtime.
pub fn init_metrics(config: &ObservabilityConfig) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.enabled {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            REQUEST_DURATION_BUCKETS,
        )
        .context("invalid histogram buckets")?
        .install_recorder()
        .context("failed to install Prometheus recorder")?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    let status_category = match status {
        200..=299 => "2xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    };
    counter!("http_requests_by_status", "status_category" => status_category).increment(1);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// `GET /metrics` in Prometheus text format.
pub fn metrics_router<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_student_created() {
    counter!("students_created_total").increment(1);
}

pub fn track_login_success() {
    counter!("student_logins_total", "status" => "success").increment(1);
}

pub fn track_login_failure(reason: &str) {
    counter!(
        "student_logins_total",
        "status" => "failure",
        "reason" => reason.to_string()
    )
    .increment(1);
}

pub fn track_token_issued() {
    counter!("jwt_tokens_issued_total").increment(1);
}

pub fn track_token_rejected(reason: &str) {
    counter!("jwt_tokens_rejected_total", "reason" => reason.to_string()).increment(1);
}
