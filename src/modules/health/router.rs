use axum::{Router, routing::get};

use super::controller::{banner, test_db};
use crate::state::AppState;

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/test-db", get(test_db))
}
