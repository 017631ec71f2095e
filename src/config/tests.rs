//! Configuration Tests
//!
//! Exercises defaults and validation through `Config::from_lookup`, so the
//! process environment is never touched.

#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigError, LogLevel};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.data_path, PathBuf::from("data/input.txt"));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", ""), ("LOG_LEVEL", "  "), ("DATA_PATH", "")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("LOG_LEVEL", "debug"),
            ("DATA_PATH", "/srv/numbers.txt"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.data_path, PathBuf::from("/srv/numbers.txt"));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = config_from(&[("LOG_LEVEL", "ERROR")]).unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = config_from(&[("LOG_LEVEL", "verbose")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("verbose".to_string()));
        assert_eq!(err.to_string(), "invalid log level: verbose");
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config_from(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_log_level_maps_to_tracing() {
        assert_eq!(LogLevel::Debug.as_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Info.as_tracing_level(), tracing::Level::INFO);
        assert_eq!(LogLevel::Error.as_tracing_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }
}
