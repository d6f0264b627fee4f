#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::date::PuzzleDate;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://www.nytimes.com/svc/wordle/v2";
pub const DEFAULT_STORE_PATH: &str = "wordle-words.json";
/// First day the puzzle was published.
pub const DEFAULT_START_DATE: (i32, u32, u32) = (2021, 6, 19);
pub const DEFAULT_CHECK_INTERVAL_MINUTES: u64 = 1440;
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;
/// Longest accepted check interval: 366 days.
pub const MAX_CHECK_INTERVAL_MINUTES: u64 = 366 * 1440;

/// Fully resolved settings handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub store_path: String,
    pub start_date: PuzzleDate,
    pub check_interval: Duration,
    pub request_delay: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        let (year, month, day) = DEFAULT_START_DATE;
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            store_path: DEFAULT_STORE_PATH.to_string(),
            start_date: PuzzleDate::from_ymd(year, month, day).expect("valid default start date"),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_MINUTES * 60),
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
            request_timeout: None,
        }
    }
}

impl Settings {
    pub fn set_start_date(&mut self, value: &str) -> Result<()> {
        self.start_date = validation::validate_date("start_date", value)?;
        Ok(())
    }

    pub fn set_check_interval_minutes(&mut self, minutes: u64) -> Result<()> {
        validation::validate_range(
            "check_interval_minutes",
            minutes,
            1,
            MAX_CHECK_INTERVAL_MINUTES,
        )?;
        let secs = minutes
            .checked_mul(60)
            .ok_or_else(|| SyncError::InvalidConfigValueError {
                field: "check_interval_minutes".to_string(),
                value: minutes.to_string(),
                reason: "Value is too large".to_string(),
            })?;
        self.check_interval = Duration::from_secs(secs);
        Ok(())
    }

    pub fn set_timeout_seconds(&mut self, secs: u64) -> Result<()> {
        validation::validate_positive_number("timeout_seconds", secs, 1)?;
        self.request_timeout = Some(Duration::from_secs(secs));
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn start_date(&self) -> PuzzleDate {
        self.start_date
    }

    fn check_interval(&self) -> Duration {
        self.check_interval
    }

    fn request_delay(&self) -> Duration {
        self.request_delay
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("store_path", &self.store_path)?;
        validation::validate_range(
            "check_interval_minutes",
            self.check_interval.as_secs() / 60,
            1,
            MAX_CHECK_INTERVAL_MINUTES,
        )?;
        if let Some(timeout) = self.request_timeout {
            validation::validate_positive_number("timeout_seconds", timeout.as_secs(), 1)?;
        }
        Ok(())
    }
}
