use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub poll_interval_ms: u64,
    pub request_timeout_secs: u64,
    pub export_dir: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let base = env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let api_base_url =
            Url::parse(&base).map_err(|e| Error::Config(format!("Invalid API_BASE_URL: {}", e)))?;

        Ok(Self {
            api_base_url,
            poll_interval_ms: get_env_or("POLL_INTERVAL_MS", 5000)?,
            request_timeout_secs: get_env_or("REQUEST_TIMEOUT_SECS", 30)?,
            export_dir: env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),
        })
    }
}

fn get_env_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
