use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid poll interval: {0}")]
    Interval(#[from] humantime::DurationError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_status_url")]
    pub status_service_url: String,
    #[serde(default = "default_telemetry_url")]
    pub telemetry_service_url: String,
    /// Humantime duration string, e.g. "3s" or "500ms".
    #[serde(default = "default_poll_interval")]
    pub poll_interval: String,
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,
    #[serde(default = "default_history_seed_limit")]
    pub history_seed_limit: u32,
}

fn default_status_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_telemetry_url() -> String {
    "http://localhost:8002".to_string()
}

fn default_poll_interval() -> String {
    "3s".to_string()
}

fn default_window_capacity() -> usize {
    10
}

fn default_history_seed_limit() -> u32 {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_service_url: default_status_url(),
            telemetry_service_url: default_telemetry_url(),
            poll_interval: default_poll_interval(),
            window_capacity: default_window_capacity(),
            history_seed_limit: default_history_seed_limit(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn poll_interval_duration(&self) -> Result<Duration, ConfigError> {
        Ok(humantime::parse_duration(self.poll_interval.trim())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.status_service_url, "http://localhost:8001");
        assert_eq!(config.telemetry_service_url, "http://localhost:8002");
        assert_eq!(
            config.poll_interval_duration().unwrap(),
            Duration::from_secs(3)
        );
        assert_eq!(config.window_capacity, 10);
        assert_eq!(config.history_seed_limit, 20);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let yaml = r#"
status_service_url: http://sat-status:9000
telemetry_service_url: http://sat-telemetry:9001
poll_interval: 500ms
window_capacity: 5
history_seed_limit: 8
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.status_service_url, "http://sat-status:9000");
        assert_eq!(
            config.poll_interval_duration().unwrap(),
            Duration::from_millis(500)
        );
        assert_eq!(config.window_capacity, 5);
        assert_eq!(config.history_seed_limit, 8);
    }

    #[test]
    fn garbage_interval_is_rejected() {
        let config = Config {
            poll_interval: "whenever".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.poll_interval_duration(),
            Err(ConfigError::Interval(_))
        ));
    }
}
