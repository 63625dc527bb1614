use std::sync::Arc;

use campus::router::init_router;
use campus::state::AppState;
use campus_config::{AppConfig, ObservabilityConfig};
use campus_db::{PgStudentRepository, init_db_pool, run_migrations};
use campus_observability::{init_metrics, init_tracing, shutdown_tracer};
use dotenvy::dotenv;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let observability = ObservabilityConfig::from_env();
    if let Err(e) = init_tracing(&observability) {
        eprintln!("Failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(&observability).await {
        error!(error = %format!("{e:#}"), "Server failed");
        shutdown_tracer().await;
        std::process::exit(1);
    }

    shutdown_tracer().await;
}

async fn run(observability: &ObservabilityConfig) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let pool = init_db_pool(&config.database).await?;
    run_migrations(&pool).await?;
    info!("Database ready");

    let metrics = match init_metrics(observability) {
        Ok(handle) => handle,
        Err(e) => {
            warn!(error = %e, "Metrics disabled");
            None
        }
    };

    let address = config.server.address();
    let state = AppState::new(config, Arc::new(PgStudentRepository::new(pool)));
    let app = init_router(state, metrics);

    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
