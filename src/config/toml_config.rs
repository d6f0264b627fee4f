use crate::config::Settings;
use crate::utils::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Optional settings file. Every key may be omitted; present keys override
/// the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    pub start_date: Option<String>,
    pub check_interval_minutes: Option<u64>,
    pub request_delay_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SyncError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SyncError::config(format!("TOML parsing error: {}", e)))
    }

    /// Overlays the keys present in this file onto `settings`.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(endpoint) = &self.source.endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(secs) = self.source.timeout_seconds {
            settings.set_timeout_seconds(secs)?;
        }
        if let Some(path) = &self.store.path {
            settings.store_path = path.clone();
        }
        if let Some(start) = &self.schedule.start_date {
            settings.set_start_date(start)?;
        }
        if let Some(minutes) = self.schedule.check_interval_minutes {
            settings.set_check_interval_minutes(minutes)?;
        }
        if let Some(ms) = self.schedule.request_delay_ms {
            settings.request_delay = Duration::from_millis(ms);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://puzzles.example.com/v2"
timeout_seconds = 10

[store]
path = "data/words.json"

[schedule]
start_date = "2022-01-01"
check_interval_minutes = 60
request_delay_ms = 250
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.api_endpoint, "https://puzzles.example.com/v2");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(10)));
        assert_eq!(settings.store_path, "data/words.json");
        assert_eq!(settings.start_date.to_string(), "2022-01-01");
        assert_eq!(settings.check_interval, Duration::from_secs(3600));
        assert_eq!(settings.request_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = TomlConfig::from_toml_str("[store]\npath = \"other.json\"\n").unwrap();
        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.store_path, "other.json");
        assert_eq!(settings, Settings {
            store_path: "other.json".to_string(),
            ..Settings::default()
        });
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(TomlConfig::from_toml_str("[store]\nfile = \"x.json\"\n").is_err());
    }

    #[test]
    fn test_bad_start_date_is_rejected() {
        let config = TomlConfig::from_toml_str("[schedule]\nstart_date = \"19-06-2021\"\n").unwrap();
        assert!(config.apply_to(&mut Settings::default()).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = TomlConfig::from_toml_str("[source]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.apply_to(&mut Settings::default()).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[schedule]\ncheck_interval_minutes = 5\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.schedule.check_interval_minutes, Some(5));
    }
}
