use std::sync::Arc;

use campus_config::AppConfig;
use campus_db::StudentRepository;

/// Shared by every handler. Cloning is cheap: both fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    pub fn new(config: AppConfig, students: Arc<dyn StudentRepository>) -> Self {
        Self {
            config: Arc::new(config),
            students,
        }
    }
}
