use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One year.
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 366;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Lifetime of issued access tokens.
    pub token_ttl: chrono::Duration,

    /// Allowed CORS origin, any origin when unset.
    pub cors_origin: Option<HeaderValue>,

    /// Credentials for the admin account created on first start.
    pub admin_login: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl = match optional_var("TOKEN_TTL_HOURS") {
            Some(value) => parse_token_ttl(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "TOKEN_TTL_HOURS".to_string(),
                value,
            })?,
            None => chrono::Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        };

        let cors_origin = match optional_var("CORS_ORIGIN") {
            Some(value) => Some(HeaderValue::from_str(&value).map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGIN".to_string(),
                    value: value.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            token_ttl,
            cors_origin,
            admin_login: optional_var("ADMIN_LOGIN"),
            admin_password: optional_var("ADMIN_PASSWORD"),
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parses a token lifetime in whole hours, between one hour and one year.
fn parse_token_ttl(value: &str) -> Option<chrono::Duration> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|hours| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
        .and_then(chrono::Duration::try_hours)
}
