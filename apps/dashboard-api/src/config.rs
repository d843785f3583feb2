use std::time::Duration;

use secrecy::Secret;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, DATABASE_URL, DB_CONNECT_RETRIES, DB_MAX_CONNECTIONS, MAX_BODY_SIZE_BYTES,
    RATE_LIMIT_BURST, RATE_LIMIT_PER_MINUTE, REQUEST_TIMEOUT_SECS, RUN_MIGRATIONS,
    SHUTDOWN_TIMEOUT_SECS,
};

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub rate_limit_per_minute: u32,
    pub rate_limit_burst: u32,
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            rate_limit_per_minute: 100,
            rate_limit_burst: 150,
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        // Zero would make the governor replenish interval undefined.
        let rate_limit_per_minute =
            parse_or(get(RATE_LIMIT_PER_MINUTE), default.rate_limit_per_minute).max(1);
        let rate_limit_burst = parse_or(get(RATE_LIMIT_BURST), default.rate_limit_burst).max(1);
        let request_timeout_secs = parse_or(get(REQUEST_TIMEOUT_SECS), default.request_timeout.as_secs());
        let max_body_size = parse_or(get(MAX_BODY_SIZE_BYTES), default.max_body_size);
        let shutdown_timeout_secs =
            parse_or(get(SHUTDOWN_TIMEOUT_SECS), default.shutdown_timeout.as_secs());

        let cors_allowed_origins = get(CORS_ALLOWED_ORIGINS)
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(default.cors_allowed_origins);

        Self {
            rate_limit_per_minute,
            rate_limit_burst,
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_size,
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
            cors_allowed_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

/// Connection settings for the MySQL pool. The URL carries credentials and
/// is only exposed when the pool is built.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    pub max_connections: u32,
    pub connect_retries: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let url = get(DATABASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| format!("{} environment variable must be set", DATABASE_URL))?;

        Ok(Self {
            url: Secret::new(url),
            max_connections: parse_or(get(DB_MAX_CONNECTIONS), 10u32).max(1),
            connect_retries: parse_or(get(DB_CONNECT_RETRIES), 10),
            run_migrations: parse_flag(get(RUN_MIGRATIONS), true),
        })
    }
}
