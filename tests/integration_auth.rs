mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use campus::campus_auth::create_access_token_at;
use campus::campus_config::JwtConfig;
use common::{
    TEST_SECRET, create_logged_in_student, generate_unique_email, json_request, login, send,
    setup_test_app, signup,
};
use serde_json::json;
use uuid::Uuid;

fn get_students(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/students");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_signup_returns_created_record_without_password() {
    let app = setup_test_app();

    let (status, body) = signup(&app.router, "Alice", "alice@x.com", "pw1").await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "alice@x.com");
    assert_eq!(body["department"], "CS");
    assert_eq!(body["year"], 2);
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("$2"));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = setup_test_app();
    let email = generate_unique_email();

    let (status, _) = signup(&app.router, "Alice", &email, "pw1").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = signup(&app.router, "Alice Again", &email.to_uppercase(), "pw2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "User already exists"}));
    assert_eq!(app.students.len(), 1);
}

#[tokio::test]
async fn test_signup_validation_errors_are_bad_request() {
    let app = setup_test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            "POST",
            "/signup",
            None,
            Some(json!({"name": "Alice", "email": "not-an-email", "password": "pw1"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email must be a valid email address");

    let (status, body) = send(
        &app.router,
        json_request("POST", "/signup", None, Some(json!({"email": "a@x.com", "password": "pw1"}))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn test_login_success_returns_token() {
    let app = setup_test_app();
    signup(&app.router, "Alice", "alice@x.com", "pw1").await;

    let (status, body) = login(&app.router, "alice@x.com", "pw1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn test_login_normalizes_email() {
    let app = setup_test_app();
    signup(&app.router, "Alice", "Alice@X.com", "pw1").await;

    let (status, _) = login(&app.router, "  ALICE@x.COM ", "pw1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = setup_test_app();
    signup(&app.router, "Alice", "alice@x.com", "pw1").await;

    let wrong_password = login(&app.router, "alice@x.com", "pw2").await;
    let unknown_email = login(&app.router, "nobody@x.com", "pw1").await;

    assert_eq!(wrong_password.0, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password.1, json!({"error": "Invalid credentials"}));
}

#[tokio::test]
async fn test_login_with_empty_fields_is_invalid_credentials() {
    let app = setup_test_app();
    signup(&app.router, "Alice", "alice@x.com", "pw1").await;

    for (email, password) in [("alice@x.com", ""), ("", "pw1"), ("", "")] {
        let (status, body) = login(&app.router, email, password).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{email:?} / {password:?}");
        assert_eq!(body, json!({"error": "Invalid credentials"}));
    }
}

#[tokio::test]
async fn test_signup_trims_email_before_validating() {
    let app = setup_test_app();

    let (status, body) = signup(&app.router, "Bob", "  Bob@x.com ", "pw1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "bob@x.com");

    let (status, _) = login(&app.router, " bob@x.com", "pw1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_blank_authorization_header_is_401() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, get_students(Some(""))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Access denied"}));
}

#[tokio::test]
async fn test_missing_authorization_header_is_401() {
    let app = setup_test_app();

    for uri in ["/students", "/students/00000000-0000-0000-0000-000000000000"] {
        let (status, body) = send(&app.router, json_request("GET", uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body, json!({"error": "Access denied"}));
    }

    let (status, _) = send(
        &app.router,
        json_request("PUT", "/students/x", None, Some(json!({"name": "X"}))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app.router, json_request("DELETE", "/students/x", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_tokens_are_403() {
    let app = setup_test_app();

    for value in ["Bearer", "Bearer ", "Bearer garbage", "Basic dXNlcjpwYXNz", "token-without-scheme"] {
        let (status, body) = send(&app.router, get_students(Some(value))).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{value:?}");
        assert_eq!(body, json!({"error": "Invalid token"}));
    }
}

#[tokio::test]
async fn test_forged_token_is_403() {
    let app = setup_test_app();
    let forger = JwtConfig {
        secret: "some-other-secret-that-is-long-enough".to_string(),
        access_token_expiry: 3600,
    };
    let token = create_access_token_at(Uuid::new_v4(), chrono::Utc::now().timestamp(), &forger)
        .unwrap();

    let (status, body) = send(&app.router, get_students(Some(&format!("Bearer {token}")))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_expired_token_is_403() {
    let app = setup_test_app();
    let config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    };
    let issued_two_hours_ago = chrono::Utc::now().timestamp() - 7200;
    let token = create_access_token_at(Uuid::new_v4(), issued_two_hours_ago, &config).unwrap();

    let (status, body) = send(&app.router, get_students(Some(&format!("Bearer {token}")))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let app = setup_test_app();
    let (_, token) = create_logged_in_student(&app.router).await;

    let (status, body) = send(&app.router, get_students(Some(&format!("bearer {token}")))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let app = setup_test_app();

    let (status, _) = send(&app.router, json_request("GET", "/test-db", None, None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = login(&app.router, "nobody@x.com", "pw").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
