use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Optional at startup: without it the service still runs, `/api/status`
    /// reports `configured: false`, and `/api/scores` fails only when the
    /// live feed has nothing to serve.
    pub balldontlie_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: match std::env::var("PORT") {
                Ok(raw) => raw.parse().context("PORT must be a number")?,
                Err(_) => 3000,
            },
            balldontlie_api_key: std::env::var("BALLDONTLIE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        })
    }
}
