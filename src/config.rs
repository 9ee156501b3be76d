use std::env;
use std::path::PathBuf;

use crate::error::GatewayError;

pub const DEFAULT_UPSTREAM_URL: &str = "https://motofix-admin-dashboard.onrender.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub upstream_url: String,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, GatewayError> {
        let _ = dotenvy::dotenv();

        let upstream_url = env::var("UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 10000)?,
            upstream_url,
            static_dir: PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string())),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            upstream_timeout_secs: parse_or_default("UPSTREAM_TIMEOUT_SECS", 30)?,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, GatewayError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| GatewayError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
