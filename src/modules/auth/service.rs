use campus_auth::create_access_token;
use campus_config::AppConfig;
use campus_core::{AppError, hash_password, normalize_email, verify_password};
use campus_db::{RepositoryError, StudentRepository};
use campus_models::{LoginRequest, NewStudent, SignupRequest, Student};
use campus_observability::{
    track_login_failure, track_login_success, track_student_created, track_token_issued,
};
use tracing::{info, instrument, warn};

pub const USER_EXISTS: &str = "User already exists";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

// bcrypt is CPU bound, keep it off the async workers.
async fn hash_off_thread(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(AppError::internal)?
}

async fn verify_off_thread(password: String, digest: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &digest))
        .await
        .map_err(AppError::internal)?
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(students, config, dto), fields(email = %dto.email))]
    pub async fn signup(
        students: &dyn StudentRepository,
        config: &AppConfig,
        dto: SignupRequest,
    ) -> Result<Student, AppError> {
        let email = normalize_email(&dto.email);

        if students.email_exists(&email).await? {
            warn!("Signup rejected: email already registered");
            return Err(AppError::bad_request(USER_EXISTS));
        }

        let password_digest = hash_off_thread(dto.password, config.password.cost).await?;

        let student = students
            .create(NewStudent {
                name: dto.name,
                email,
                password_digest,
                department: dto.department,
                year: dto.year,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent signup for the same address.
                RepositoryError::DuplicateEmail => AppError::bad_request(USER_EXISTS),
                other => AppError::internal(other),
            })?;

        track_student_created();
        info!(student_id = %student.id, "Student signed up");

        Ok(student)
    }

    /// Returns a signed token for valid credentials.
    ///
    /// Unknown email and wrong password produce the same error.
    #[instrument(skip(students, config, dto))]
    pub async fn login(
        students: &dyn StudentRepository,
        config: &AppConfig,
        dto: LoginRequest,
    ) -> Result<String, AppError> {
        let email = normalize_email(&dto.email);

        let Some(credentials) = students.find_credentials(&email).await? else {
            track_login_failure("unknown_email");
            return Err(AppError::bad_request(INVALID_CREDENTIALS));
        };

        if !verify_off_thread(dto.password, credentials.password_digest).await? {
            track_login_failure("bad_password");
            return Err(AppError::bad_request(INVALID_CREDENTIALS));
        }

        let token = create_access_token(credentials.id, &config.jwt).map_err(AppError::internal)?;

        track_token_issued();
        track_login_success();
        info!(student_id = %credentials.id, "Student logged in");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use campus_config::{CorsConfig, DatabaseConfig, JwtConfig, PasswordConfig, ServerConfig};
    use campus_db::{InMemoryStudentRepository, MockStudentRepository};

    fn config() -> AppConfig {
        AppConfig {
            jwt: JwtConfig {
                secret: "test-secret-key-at-least-32-characters-long".to_string(),
                access_token_expiry: 3600,
            },
            password: PasswordConfig { cost: 4 },
            database: DatabaseConfig {
                url: "postgres://localhost/campus_test".to_string(),
                max_connections: 1,
            },
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    fn signup_request(email: &str) -> SignupRequest {
        SignupRequest {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "pw1".to_string(),
            department: Some("CS".to_string()),
            year: Some(2),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_stores_normalized_email_and_digest() {
        let repo = InMemoryStudentRepository::new();
        let student = AuthService::signup(&repo, &config(), signup_request("Alice@X.com"))
            .await
            .unwrap();

        assert_eq!(student.email, "alice@x.com");
        let digest = repo.stored_digest("alice@x.com").unwrap();
        assert_ne!(digest, "pw1");
        assert!(verify_password("pw1", &digest).unwrap());
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let repo = InMemoryStudentRepository::new();
        let config = config();
        AuthService::signup(&repo, &config, signup_request("alice@x.com"))
            .await
            .unwrap();

        let err = AuthService::signup(&repo, &config, signup_request("ALICE@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), USER_EXISTS);
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive() {
        let repo = InMemoryStudentRepository::new();
        let config = config();
        AuthService::signup(&repo, &config, signup_request("alice@x.com"))
            .await
            .unwrap();

        let token = AuthService::login(&repo, &config, login_request("  ALICE@x.com ", "pw1"))
            .await
            .unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[tokio::test]
    async fn test_login_failures_share_one_message() {
        let repo = InMemoryStudentRepository::new();
        let config = config();
        AuthService::signup(&repo, &config, signup_request("alice@x.com"))
            .await
            .unwrap();

        let wrong_password = AuthService::login(&repo, &config, login_request("alice@x.com", "pw2"))
            .await
            .unwrap_err();
        let unknown_email = AuthService::login(&repo, &config, login_request("bob@x.com", "pw1"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
        assert_eq!(unknown_email.status, StatusCode::BAD_REQUEST);
        assert_eq!(wrong_password.public_message(), INVALID_CREDENTIALS);
        assert_eq!(unknown_email.public_message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_credentials()
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let err = AuthService::login(&repo, &config(), login_request("alice@x.com", "pw1"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Server error");
    }

    #[tokio::test]
    async fn test_signup_race_maps_to_duplicate() {
        let mut repo = MockStudentRepository::new();
        repo.expect_email_exists().returning(|_| Ok(false));
        repo.expect_create()
            .returning(|_| Err(RepositoryError::DuplicateEmail));

        let err = AuthService::signup(&repo, &config(), signup_request("alice@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), USER_EXISTS);
    }
}
