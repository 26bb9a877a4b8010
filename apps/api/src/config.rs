use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Jobs returned by /match/rank when the request carries no limit.
    pub rank_default_limit: usize,
    pub rank_max_limit: usize,
    /// Empty = permissive CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            rank_default_limit: 6,
            rank_max_limit: 100,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            rank_default_limit: parse_env("RANK_DEFAULT_LIMIT", defaults.rank_default_limit)?,
            rank_max_limit: parse_env("RANK_MAX_LIMIT", defaults.rank_max_limit)?,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or_default(),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{value}'")),
        Err(_) => Ok(default),
    }
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
