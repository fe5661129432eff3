use std::env;

use crate::errors::AppError;

/// Runtime configuration, read from the environment (and `.env` via dotenvy in main).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API, without trailing slash.
    pub api_url: String,
    /// Shared secret the access tokens are signed with.
    pub auth_secret: String,
    pub session_key: Option<String>,
    pub bind_addr: String,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let api_url = required("API_URL")?;
        url::Url::parse(&api_url)
            .map_err(|e| AppError::Config(format!("API_URL is not a valid URL: {e}")))?;

        let auth_secret = required("AUTH_SECRET")?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| {
            log::info!("BIND_ADDR not set, using default: 127.0.0.1:8080");
            "127.0.0.1:8080".to_string()
        });

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            auth_secret,
            session_key: env::var("SESSION_KEY").ok(),
            bind_addr,
            cookie_secure,
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        _ => Err(AppError::Config(format!("{key} must be set"))),
    }
}
