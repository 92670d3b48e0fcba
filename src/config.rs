use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

pub const DEFAULT_API_URL: &str = "https://praktikum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 5 * 60;
const DEFAULT_RETRY_INTERVAL_SECS: u64 = 60;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub praktikum_token: String,
    pub api_url: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub poll_interval: Duration,
    pub idle_interval: Duration,
    pub retry_interval: Duration,
    pub request_timeout: Duration,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let praktikum_token =
            var("PRAKTIKUM_TOKEN").ok_or_else(|| anyhow!("PRAKTIKUM_TOKEN must be set in .env"))?;

        let api_url = var("HOMEWORK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let telegram_bot_token = var("TELEGRAM_TOKEN");
        let telegram_chat_id = var("TELEGRAM_CHAT_ID");

        let poll_interval = seconds_or(
            var("POLL_INTERVAL_SECS").as_deref(),
            DEFAULT_POLL_INTERVAL_SECS,
        );
        // Sleeping after an empty poll is opt-out; 0 re-polls immediately.
        let idle_interval = seconds_or(
            var("IDLE_INTERVAL_SECS").as_deref(),
            poll_interval.as_secs(),
        );
        let retry_interval = seconds_or(
            var("RETRY_INTERVAL_SECS").as_deref(),
            DEFAULT_RETRY_INTERVAL_SECS,
        );
        let request_timeout = seconds_or(
            var("REQUEST_TIMEOUT_SECS").as_deref(),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        );

        let log_dir = var("LOG_DIR").map(PathBuf::from);

        Ok(Self {
            praktikum_token,
            api_url,
            telegram_bot_token,
            telegram_chat_id,
            poll_interval,
            idle_interval,
            retry_interval,
            request_timeout,
            log_dir,
        })
    }
}

/// Parses a whole number of seconds, falling back to `default` when the value
/// is missing or not a number.
pub fn seconds_or(raw: Option<&str>, default: u64) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_secs(secs)
}
