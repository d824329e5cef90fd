//! Configuration types and loading
//!
//! Library crates take these values as plain parameters; only the binary
//! reads the environment.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Instance-specific settings
    pub instance: InstanceConfig,

    /// Timer subsystem settings
    pub timers: TimerConfig,

    /// Dashboard settings
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    /// Application title shown in logs
    pub app_title: String,
    /// Timezone label (display only)
    pub timezone: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimerConfig {
    /// Tick interval for running piece timers, in seconds
    pub tick_interval_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Look-ahead window for commemorative date alerts, in days
    pub alert_window_days: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instance: InstanceConfig {
                app_title: "Dote Ops".to_string(),
                timezone: "America/Sao_Paulo".to_string(),
            },
            timers: TimerConfig {
                tick_interval_seconds: 1,
            },
            dashboard: DashboardConfig {
                alert_window_days: 15,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(title) = std::env::var("DOTE_APP_TITLE") {
            config.instance.app_title = title;
        }
        if let Ok(tz) = std::env::var("DOTE_TIMEZONE") {
            config.instance.timezone = tz;
        }
        if let Ok(interval) = std::env::var("DOTE_TICK_INTERVAL_SECONDS") {
            config.timers.tick_interval_seconds = Self::parse(&interval, "DOTE_TICK_INTERVAL_SECONDS")?;
        }
        if let Ok(window) = std::env::var("DOTE_ALERT_WINDOW_DAYS") {
            config.dashboard.alert_window_days = Self::parse(&window, "DOTE_ALERT_WINDOW_DAYS")?;
        }

        Ok(config)
    }

    fn parse<T: std::str::FromStr>(value: &str, key: &str) -> Result<T, ConfigError> {
        value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("cannot parse {value:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_settings() {
        let config = AppConfig::default();
        assert_eq!(config.timers.tick_interval_seconds, 1);
        assert_eq!(config.dashboard.alert_window_days, 15);
        assert_eq!(config.instance.app_title, "Dote Ops");
    }
}
