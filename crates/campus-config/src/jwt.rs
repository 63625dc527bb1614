use crate::env::{ConfigError, lookup, parsed_or, required};

/// Default token lifetime: one hour.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

/// Upper bound on token lifetime: one year.
pub const MAX_ACCESS_TOKEN_EXPIRY: i64 = 365 * 24 * 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(lookup("JWT_SECRET"), lookup("JWT_ACCESS_EXPIRY"))
    }

    pub fn from_values(
        secret: Option<String>,
        expiry: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secret = required("JWT_SECRET", secret)?;
        let access_token_expiry =
            parsed_or("JWT_ACCESS_EXPIRY", expiry, DEFAULT_ACCESS_TOKEN_EXPIRY)?;

        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                var: "JWT_ACCESS_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        if access_token_expiry > MAX_ACCESS_TOKEN_EXPIRY {
            return Err(ConfigError::Invalid {
                var: "JWT_ACCESS_EXPIRY",
                reason: format!("must be at most {MAX_ACCESS_TOKEN_EXPIRY} seconds"),
            });
        }

        Ok(Self {
            secret,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_fatal() {
        let err = JwtConfig::from_values(None, None).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_default_expiry_is_one_hour() {
        let config = JwtConfig::from_values(Some("s3cret".to_string()), None).unwrap();
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_token_expiry, 3600);
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let err = JwtConfig::from_values(Some("s3cret".to_string()), Some("0".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "JWT_ACCESS_EXPIRY", .. }));
    }

    #[test]
    fn test_oversized_expiry_rejected() {
        let err = JwtConfig::from_values(
            Some("s3cret".to_string()),
            Some(i64::MAX.to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "JWT_ACCESS_EXPIRY", .. }));

        let config = JwtConfig::from_values(
            Some("s3cret".to_string()),
            Some(MAX_ACCESS_TOKEN_EXPIRY.to_string()),
        )
        .unwrap();
        assert_eq!(config.access_token_expiry, MAX_ACCESS_TOKEN_EXPIRY);
    }
}
