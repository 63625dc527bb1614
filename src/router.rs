use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use campus_config::CorsConfig;
use campus_observability::{PrometheusHandle, logging_middleware, metrics_middleware, metrics_router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::middleware::auth::require_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::health::router::init_health_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}

/// Builds the full application. `/metrics` is mounted only when a
/// Prometheus handle is supplied.
pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_health_router())
        .merge(init_auth_router())
        .merge(
            init_students_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        );

    if let Some(handle) = metrics {
        router = router.merge(metrics_router(handle));
    }

    router
        .with_state(state.clone())
        .layer(cors_layer(&state.config.cors))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
