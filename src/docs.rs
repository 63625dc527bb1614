use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use campus_core::ErrorResponse;
use campus_models::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, Student, UpdateStudentDto,
};

use crate::modules::health::controller::DbTimeResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::banner,
        crate::modules::health::controller::test_db,
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            Student,
            SignupRequest,
            LoginRequest,
            LoginResponse,
            UpdateStudentDto,
            MessageResponse,
            ErrorResponse,
            DbTimeResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and store probes"),
        (name = "Authentication", description = "Signup and login"),
        (name = "Students", description = "Student directory, bearer token required")
    ),
    info(
        title = "Smart Campus API",
        version = "0.1.0",
        description = "Student directory with bearer-token authentication, built with Rust, Axum and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
