use anyhow::{Context, Result};

pub const DEFAULT_AUTH_COOKIE: &str = "auth_token";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When unset the in-memory store is used.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Cookie read by `/api/auth/me` to find the mock user.
    pub auth_cookie_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            auth_cookie_name: optional_env("AUTH_COOKIE_NAME")
                .unwrap_or_else(|| DEFAULT_AUTH_COOKIE.to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
