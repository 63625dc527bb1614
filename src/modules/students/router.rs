use axum::{Router, routing::get};

use super::controller::{delete_student, get_student, get_students, update_student};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/students", get(get_students)).route(
        "/students/{id}",
        get(get_student).put(update_student).delete(delete_student),
    )
}
