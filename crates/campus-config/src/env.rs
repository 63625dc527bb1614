//! Environment lookup helpers shared by the config sections.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

pub(crate) fn lookup(var: &'static str) -> Option<String> {
    std::env::var(var).ok()
}

/// A value that must be present and non-blank.
pub(crate) fn required(
    var: &'static str,
    value: Option<String>,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(var)),
    }
}

/// An optional value parsed into `T`, falling back to `default` when absent.
///
/// A value that is present but does not parse is an error rather than a
/// silent fallback.
pub(crate) fn parsed_or<T>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(v) if v.trim().is_empty() => Ok(default),
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}
