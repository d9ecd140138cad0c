use crate::{error::config::ConfigError, limiter::RateLimitConfig};

pub struct Config {
    pub database_url: String,
    pub server_address: String,
    pub lookup_rate_limit: RateLimitConfig,
    pub attendance_rate_limit: RateLimitConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup_default = RateLimitConfig::lookup_default();
        let attendance_default = RateLimitConfig::attendance_default();

        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            server_address: var_or("SERVER_ADDRESS", "0.0.0.0:8080"),
            lookup_rate_limit: RateLimitConfig {
                max_requests: parse_var("LOOKUP_RATE_MAX_REQUESTS", lookup_default.max_requests)?,
                window_millis: parse_var("LOOKUP_RATE_WINDOW_MILLIS", lookup_default.window_millis)?,
            },
            attendance_rate_limit: RateLimitConfig {
                max_requests: parse_var(
                    "ATTENDANCE_RATE_MAX_REQUESTS",
                    attendance_default.max_requests,
                )?,
                window_millis: parse_var(
                    "ATTENDANCE_RATE_WINDOW_MILLIS",
                    attendance_default.window_millis,
                )?,
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
