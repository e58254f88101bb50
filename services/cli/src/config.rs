use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Root URL of the generation service; the media route hangs off it.
    pub service_url: String,
    /// Bounded wait for the generation call. Generation is slow on the
    /// service side (script, audio, and video are produced per day), so
    /// the default is generous.
    pub request_timeout: Duration,
    pub log_level: Level,
}

const DEFAULT_TIMEOUT_SECS: u64 = 600;

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let service_url = std::env::var("EDUX_SERVICE_URL")
            .map_err(|_| ConfigError::MissingVar("EDUX_SERVICE_URL".to_string()))?;
        if service_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "EDUX_SERVICE_URL".to_string(),
                "value is empty".to_string(),
            ));
        }

        let timeout_secs = match std::env::var("EDUX_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().ok().filter(|&secs| secs > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "EDUX_REQUEST_TIMEOUT_SECS".to_string(),
                    format!("'{}' is not a positive number of seconds", raw),
                )
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            service_url,
            request_timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tracing::Level;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("EDUX_SERVICE_URL");
            env::remove_var("EDUX_REQUEST_TIMEOUT_SECS");
            env::remove_var("RUST_LOG");
        }
    }

    fn set_minimal_env() {
        unsafe {
            env::set_var("EDUX_SERVICE_URL", "http://127.0.0.1:8000");
        }
    }

    #[test]
    fn test_config_error_display() {
        let missing_var = ConfigError::MissingVar("TEST_VAR".to_string());
        assert_eq!(
            format!("{}", missing_var),
            "Missing environment variable: TEST_VAR"
        );

        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    #[serial]
    fn test_config_from_env_minimal() {
        clear_env_vars();
        set_minimal_env();

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.service_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(600));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("EDUX_SERVICE_URL", "http://course-gen.internal:9000");
            env::set_var("EDUX_REQUEST_TIMEOUT_SECS", "45");
            env::set_var("RUST_LOG", "debug");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.service_url, "http://course-gen.internal:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(45));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    #[serial]
    fn test_config_missing_service_url() {
        clear_env_vars();

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::MissingVar(var) => assert_eq!(var, "EDUX_SERVICE_URL"),
            _ => panic!("Expected MissingVar for EDUX_SERVICE_URL"),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_service_url() {
        clear_env_vars();
        unsafe {
            env::set_var("EDUX_SERVICE_URL", "   ");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "EDUX_SERVICE_URL"),
            _ => panic!("Expected InvalidValue for EDUX_SERVICE_URL"),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout() {
        clear_env_vars();
        set_minimal_env();

        for bad in ["not-a-number", "0", "-5"] {
            unsafe {
                env::set_var("EDUX_REQUEST_TIMEOUT_SECS", bad);
            }
            let err = Config::from_env().unwrap_err();
            match err {
                ConfigError::InvalidValue(var, _) => {
                    assert_eq!(var, "EDUX_REQUEST_TIMEOUT_SECS")
                }
                _ => panic!("Expected InvalidValue for EDUX_REQUEST_TIMEOUT_SECS"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        set_minimal_env();
        unsafe {
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "RUST_LOG"),
            _ => panic!("Expected InvalidValue for RUST_LOG"),
        }
    }
}
