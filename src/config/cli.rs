use crate::config::{Settings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "wordle-sync")]
#[command(about = "Keeps a local JSON archive of daily Wordle answers up to date")]
pub struct CliConfig {
    /// TOML settings file; explicit flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON file holding the archive, relative to the executable [default: wordle-words.json]
    #[arg(long)]
    pub store_path: Option<String>,

    /// Base URL; requests go to <endpoint>/<YYYY-MM-DD>.json
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// First day to backfill [default: 2021-06-19]
    #[arg(long)]
    pub start_date: Option<String>,

    /// Minutes between daily checks [default: 1440]
    #[arg(long)]
    pub check_interval_minutes: Option<u64>,

    /// Pause after each successful backfill request [default: 1000]
    #[arg(long)]
    pub request_delay_ms: Option<u64>,

    /// Per-request timeout; the HTTP client default applies when unset
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Do not draw the countdown line
    #[arg(long)]
    pub no_countdown: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the settings file, then explicit flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut settings)?;
        }

        if let Some(endpoint) = &self.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(path) = &self.store_path {
            settings.store_path = path.clone();
        }
        if let Some(start) = &self.start_date {
            settings.set_start_date(start)?;
        }
        if let Some(minutes) = self.check_interval_minutes {
            settings.set_check_interval_minutes(minutes)?;
        }
        if let Some(ms) = self.request_delay_ms {
            settings.request_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = self.timeout_seconds {
            settings.set_timeout_seconds(secs)?;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["wordle-sync"]);
        assert_eq!(cli.resolve().unwrap(), Settings::default());
        assert!(!cli.no_countdown);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[store]\npath = \"from-file.json\"\n[schedule]\nrequest_delay_ms = 10\n")
            .unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "wordle-sync",
            "--config",
            &config_path,
            "--store-path",
            "from-flag.json",
            "--check-interval-minutes",
            "15",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.store_path, "from-flag.json");
        assert_eq!(settings.request_delay, Duration::from_millis(10));
        assert_eq!(settings.check_interval, Duration::from_secs(900));
    }

    #[test]
    fn test_invalid_flag_values_are_rejected() {
        let cli = CliConfig::parse_from(["wordle-sync", "--api-endpoint", "ftp://example.com"]);
        assert!(cli.resolve().is_err());

        let cli = CliConfig::parse_from(["wordle-sync", "--start-date", "2021/06/19"]);
        assert!(cli.resolve().is_err());

        let cli = CliConfig::parse_from(["wordle-sync", "--check-interval-minutes", "0"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_overflowing_interval_is_rejected_not_panicking() {
        let cli = CliConfig::parse_from([
            "wordle-sync",
            "--check-interval-minutes",
            "18446744073709551615",
        ]);
        assert!(cli.resolve().is_err());

        let cli = CliConfig::parse_from([
            "wordle-sync",
            "--check-interval-minutes",
            "300000000000000000",
        ]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let cli = CliConfig::parse_from(["wordle-sync", "--timeout-seconds", "0"]);
        assert!(cli.resolve().is_err());

        let cli = CliConfig::parse_from(["wordle-sync", "--timeout-seconds", "30"]);
        assert_eq!(cli.resolve().unwrap().request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["wordle-sync", "--config", "/definitely/not/here.toml"]);
        assert!(cli.resolve().is_err());
    }
}
