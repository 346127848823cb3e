use crate::error::{config_error, HoursResult};
use crate::utils::time::{normalize_time, time_slots};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default opening time for a newly opened day
pub const DEFAULT_OPEN: &str = "09:00";
/// Default closing time for a newly opened day
pub const DEFAULT_CLOSE: &str = "18:00";
/// Default granularity of the time selector, in minutes
pub const DEFAULT_TIME_STEP: u32 = 30;
/// Config file merged over the defaults when present
pub const CONFIG_FILE: &str = "config/weekly_hours.toml";

/// Main configuration structure for the hours editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Opening time used when a day opens without any known hours
    pub default_open: String,
    /// Closing time used when a day opens without any known hours
    pub default_close: String,
    /// Minutes between time selector options
    pub time_step_minutes: u32,
    /// Locale for day labels
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_open: DEFAULT_OPEN.to_string(),
            default_close: DEFAULT_CLOSE.to_string(),
            time_step_minutes: DEFAULT_TIME_STEP,
            locale: "en".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment
    pub fn load() -> HoursResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = if Path::new(CONFIG_FILE).exists() {
            let content = fs::read_to_string(CONFIG_FILE)?;
            debug!("Loaded configuration from {}", CONFIG_FILE);
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        if let Ok(open) = env::var("HOURS_DEFAULT_OPEN") {
            config.default_open = open;
        }
        if let Ok(close) = env::var("HOURS_DEFAULT_CLOSE") {
            config.default_close = close;
        }
        if let Ok(step) = env::var("HOURS_TIME_STEP") {
            config.time_step_minutes = step
                .parse::<u32>()
                .map_err(|_| config_error("Invalid HOURS_TIME_STEP format"))?;
        }
        if let Ok(locale) = env::var("HOURS_LOCALE") {
            config.locale = locale;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML; missing keys keep their defaults
    pub fn from_toml(content: &str) -> HoursResult<Self> {
        Ok(toml::from_str::<Config>(content)?)
    }

    /// Check the default times and selector step, normalizing the times in place
    pub fn validate(&mut self) -> HoursResult<()> {
        self.default_open = normalize_time(&self.default_open)
            .map_err(|_| config_error(&format!("Invalid default_open: {}", self.default_open)))?;
        self.default_close = normalize_time(&self.default_close).map_err(|_| {
            config_error(&format!("Invalid default_close: {}", self.default_close))
        })?;
        time_slots(self.time_step_minutes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let mut config = Config::default();
        assert_eq!(config.default_open, "09:00");
        assert_eq!(config.default_close, "18:00");
        assert_eq!(config.time_step_minutes, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config =
            Config::from_toml("default_open = \"10:30\"\ntime_step_minutes = 15\n").unwrap();
        assert_eq!(config.default_open, "10:30");
        assert_eq!(config.default_close, "18:00");
        assert_eq!(config.time_step_minutes, 15);
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_validate_normalizes_and_rejects() {
        let mut config = Config {
            default_open: "8:00".to_string(),
            ..Config::default()
        };
        config.validate().unwrap();
        assert_eq!(config.default_open, "08:00");

        let mut bad_time = Config {
            default_close: "6 PM".to_string(),
            ..Config::default()
        };
        assert!(bad_time.validate().is_err());

        let mut bad_step = Config {
            time_step_minutes: 7,
            ..Config::default()
        };
        assert!(bad_step.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("time_step_minutes = \"often\"").is_err());
    }
}
