#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use campus::campus_config::{
    AppConfig, CorsConfig, DatabaseConfig, JwtConfig, PasswordConfig, ServerConfig,
};
use campus::campus_db::{InMemoryStudentRepository, StudentRepository};
use campus::router::init_router;
use campus::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry: 3600,
        },
        // Lowest bcrypt cost, keeps the suite fast.
        password: PasswordConfig { cost: 4 },
        database: DatabaseConfig {
            url: "postgres://localhost/campus_test".to_string(),
            max_connections: 1,
        },
        server: ServerConfig::default(),
        cors: CorsConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub students: Arc<InMemoryStudentRepository>,
}

pub fn setup_test_app() -> TestApp {
    let students = Arc::new(InMemoryStudentRepository::new());
    TestApp {
        router: app_with_repository(students.clone()),
        students,
    }
}

pub fn app_with_repository(students: Arc<dyn StudentRepository>) -> Router {
    init_router(AppState::new(test_config(), students), None)
}

pub fn generate_unique_email() -> String {
    format!("student_{}@test.com", Uuid::new_v4().simple())
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request and decodes the JSON body (`Value::Null` when empty or not JSON).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn signup(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    let body = json!({
        "name": name,
        "email": email,
        "password": password,
        "department": "CS",
        "year": 2
    });
    send(app, json_request("POST", "/signup", None, Some(body))).await
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    let body = json!({ "email": email, "password": password });
    send(app, json_request("POST", "/login", None, Some(body))).await
}

/// Signs a fresh student up and returns `(id, token)`.
pub async fn create_logged_in_student(app: &Router) -> (String, String) {
    let email = generate_unique_email();
    let (status, student) = signup(app, "Test Student", &email, "testpass123").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(app, &email, "testpass123").await;
    assert_eq!(status, StatusCode::OK);

    (
        student["id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}
