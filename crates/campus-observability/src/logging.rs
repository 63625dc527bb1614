use std::fs;
use std::time::Instant;

use anyhow::Context;
use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use campus_config::ObservabilityConfig;
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::{default_filter, init_basic_console_logging};

/// Logs one line when a request arrives and one when it completes, with the
/// level chosen by the response status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(request_id = %request_id, method = %method, path = %path, "Incoming request");

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Request completed"
        ),
    }

    response
}

fn init_tracer(config: &ObservabilityConfig) -> Result<Tracer, TraceError> {
    info!(endpoint = %config.otlp_endpoint, "Initializing OpenTelemetry tracer");

    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, "campus"),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new("environment", config.environment.clone()),
    ]);

    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(config.otlp_endpoint.clone());

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

/// Installs the global subscriber.
///
/// With observability enabled this layers a compact console writer, a daily
/// rolling error log, a daily rolling JSON log and, when the exporter can be
/// built, an OpenTelemetry layer. With it disabled only the console writer is
/// installed.
///
/// Must be called from inside a Tokio runtime.
pub fn init_tracing(config: &ObservabilityConfig) -> anyhow::Result<()> {
    if !config.enabled {
        init_basic_console_logging(&config.log_level);
        return Ok(());
    }

    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {}", config.log_dir))?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.log_level));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "campus.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // Structured logs for log shippers.
    let json_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "campus.json");
    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer);

    match init_tracer(config) {
        Ok(tracer) => {
            registry
                .with(tracing_opentelemetry::layer().with_tracer(tracer))
                .try_init()
                .context("tracing subscriber already installed")?;
            info!("Tracing initialized with OpenTelemetry and file logging");
        }
        Err(e) => {
            eprintln!("Failed to initialize OpenTelemetry: {e}. Continuing without trace export");
            registry
                .try_init()
                .context("tracing subscriber already installed")?;
            warn!("Tracing initialized without OpenTelemetry (file logging only)");
        }
    }

    Ok(())
}

/// Flushes pending spans. Safe to call when no exporter was installed.
pub async fn shutdown_tracer() {
    info!("Shutting down OpenTelemetry tracer");
    global::shutdown_tracer_provider();
}
