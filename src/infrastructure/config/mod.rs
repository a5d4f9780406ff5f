use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_VOCABULARY_KEY: &str = "english_vocabulary";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;
pub const CONNECT_RETRIES: u32 = 10;
pub const CONNECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub redis_url: String,
    pub vocabulary_key: String,
    pub port: u16,
    pub refresh_interval: Duration,
    pub store_retries: u32,
}

impl Settings {
    /// Reads the process environment. Call `dotenv` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let redis_url = var("REDIS_URL").ok_or(ConfigError::Missing("REDIS_URL"))?;
        let vocabulary_key = var("VOCABULARY_KEY").unwrap_or_else(|| DEFAULT_VOCABULARY_KEY.to_string());
        let port = parse(&var, "PORT")?.unwrap_or(DEFAULT_PORT);
        let refresh_secs = parse(&var, "REFRESH_INTERVAL_SECS")?.unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS);
        let store_retries = parse(&var, "STORE_RETRIES")?.unwrap_or(0);

        Ok(Self {
            redis_url,
            vocabulary_key,
            port,
            refresh_interval: Duration::from_secs(refresh_secs),
            store_retries,
        })
    }
}

fn parse<T, F>(var: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
