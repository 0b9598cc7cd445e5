use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_JOBS_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/gauravKsingh25/Data/refs/heads/main/jobs.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub jobs_source_url: String,
    /// How long the "loading may be slow" banner may stay up.
    pub advisory_window: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            jobs_source_url: DEFAULT_JOBS_SOURCE_URL.to_string(),
            advisory_window: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),
            jobs_source_url: env::var("JOBS_SOURCE_URL").unwrap_or(defaults.jobs_source_url),
            advisory_window: get_env_secs("ADVISORY_WINDOW_SECS")?
                .unwrap_or(defaults.advisory_window),
            request_timeout: get_env_secs("REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout),
        })
    }
}

fn get_env_secs(name: &str) -> Result<Option<Duration>> {
    match env::var(name) {
        Ok(raw) => parse_secs(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_secs(name: &str, raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}
