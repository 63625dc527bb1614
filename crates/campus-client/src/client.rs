use std::sync::Arc;

use campus_models::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, Student, UpdateStudentDto,
};
use chrono::Utc;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::store::TokenStore;

/// Password given to students added from the dashboard.
pub const DEFAULT_STUDENT_PASSWORD: &str = "123456";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// The dashboard's add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub department: Option<String>,
    pub year: Option<i32>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct CampusClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn TokenStore>,
    screen: Screen,
}

impl CampusClient {
    /// Opens on the dashboard when a token survived from a previous session.
    pub fn new(config: ClientConfig, store: impl TokenStore + 'static) -> Self {
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        let screen = match store.load() {
            Ok(Some(_)) => Screen::Dashboard,
            _ => Screen::Login,
        };

        Self {
            http: reqwest::Client::new(),
            config,
            store,
            screen,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }

    /// Exchanges credentials for a token, stores it and opens the dashboard.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.config.url("/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let body: LoginResponse = parse(response).await?;
        self.store.save(&body.token)?;
        self.screen = Screen::Dashboard;
        debug!("Logged in");

        Ok(())
    }

    /// Forgets the token and returns to the login screen.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.store.clear()?;
        self.screen = Screen::Login;
        Ok(())
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ClientError> {
        let request = self.authorized(self.http.get(self.config.url("/students")))?;
        parse(request.send().await?).await
    }

    pub async fn get_student(&self, id: Uuid) -> Result<Student, ClientError> {
        let url = self.config.url(&format!("/students/{id}"));
        let request = self.authorized(self.http.get(url))?;
        parse(request.send().await?).await
    }

    /// Creates a record through signup with a generated unique email and
    /// [`DEFAULT_STUDENT_PASSWORD`].
    pub async fn add_student(&self, form: StudentForm) -> Result<Student, ClientError> {
        let body = SignupRequest {
            email: generated_email(&form.name),
            name: form.name,
            password: DEFAULT_STUDENT_PASSWORD.to_string(),
            department: form.department,
            year: form.year,
        };

        let request = self.authorized(self.http.post(self.config.url("/signup")))?;
        parse(request.json(&body).send().await?).await
    }

    pub async fn update_student(&self, id: Uuid, form: StudentForm) -> Result<Student, ClientError> {
        let body = UpdateStudentDto {
            name: form.name,
            department: form.department,
            year: form.year,
        };

        let url = self.config.url(&format!("/students/{id}"));
        let request = self.authorized(self.http.put(url))?;
        parse(request.json(&body).send().await?).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_student(&self, id: Uuid) -> Result<String, ClientError> {
        let url = self.config.url(&format!("/students/{id}"));
        let request = self.authorized(self.http.delete(url))?;
        let body: MessageResponse = parse(request.send().await?).await?;
        Ok(body.message)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.store.load()?.ok_or(ClientError::NotLoggedIn)?;
        Ok(request.bearer_auth(token))
    }
}

fn generated_email(name: &str) -> String {
    let local: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    let local = if local.is_empty() { "student".to_string() } else { local };

    format!("{}{}@mail.com", local, Utc::now().timestamp_millis())
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());
    warn!(status = status.as_u16(), message = %message, "Request rejected");

    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::AccessDenied,
        StatusCode::FORBIDDEN => ClientError::InvalidToken,
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    })
}
