//! Student records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A student as returned to clients. Never carries the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub year: Option<i32>,
}

/// Internal row used by the login path to check a password.
#[derive(Debug, Clone, FromRow)]
pub struct StudentCredentials {
    pub id: Uuid,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_digest: String,
}

/// A record ready to insert: email already normalized, password already hashed.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub department: Option<String>,
    pub year: Option<i32>,
}

/// Overwrites the mutable fields of a record.
///
/// There is no partial merge: a field left out of the body is stored as null.
/// Email and password cannot be changed after signup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "department must be at most 100 characters"))]
    pub department: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 10, message = "year must be between 1 and 10"))]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serializes_without_password() {
        let student = Student {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            department: Some("CS".to_string()),
            year: Some(2),
        };
        let value = serde_json::to_value(&student).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 5);
        assert!(value.get("password").is_none());
        assert_eq!(value["department"], "CS");
        assert_eq!(value["year"], 2);
    }

    #[test]
    fn test_update_missing_fields_become_none() {
        let dto: UpdateStudentDto = serde_json::from_str(r#"{"name":"Alice B"}"#).unwrap();
        assert_eq!(dto.name, "Alice B");
        assert_eq!(dto.department, None);
        assert_eq!(dto.year, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_empty_name_invalid() {
        let dto = UpdateStudentDto {
            name: String::new(),
            department: None,
            year: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_year_out_of_range() {
        let dto = UpdateStudentDto {
            name: "Bob".to_string(),
            department: Some("Math".to_string()),
            year: Some(0),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }
}
