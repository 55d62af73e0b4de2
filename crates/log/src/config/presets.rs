//! Configuration presets for common scenarios

use super::{Config, ConsoleConfig, FileConfig};
use crate::location::CallSite;

impl Config {
    /// Create configuration from environment variables
    ///
    /// Loads `.env`, then reads `LOGWISE_FILE` (a path, or `off`),
    /// `LOGWISE_COLORS`, `LOGWISE_CALL_SITE` (`caller`, `backtrace`, `off`)
    /// and `LOGWISE_TIME_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            load_dotenv: true,
            ..Self::default()
        };

        if let Some(file) = lookup("LOGWISE_FILE") {
            config.file = match file.trim().to_lowercase().as_str() {
                "" | "off" | "none" | "false" | "0" => None,
                _ => Some(FileConfig::at(file.trim())),
            };
        }

        if let Some(colors) = lookup("LOGWISE_COLORS") {
            config.console.colors = colors != "0" && colors != "false";
        }

        if let Some(call_site) = lookup("LOGWISE_CALL_SITE") {
            config.call_site = match call_site.to_lowercase().as_str() {
                "backtrace" => CallSite::Backtrace,
                "off" | "none" => CallSite::Off,
                _ => CallSite::Caller,
            };
        }

        if let Some(format) = lookup("LOGWISE_TIME_FORMAT") {
            config.time_format = format;
        }

        config
    }

    /// Development configuration (all channels, colors)
    #[must_use]
    pub fn development() -> Self {
        Self {
            environment: Some("development".to_string()),
            console: ConsoleConfig {
                colors: cfg!(feature = "ansi"),
                ..ConsoleConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (no debug/verbose, no colors)
    #[must_use]
    pub fn production() -> Self {
        Self {
            environment: Some("production".to_string()),
            console: ConsoleConfig {
                colors: false,
                ..ConsoleConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration: no built-in sinks, no banner
    #[must_use]
    pub fn test() -> Self {
        Self {
            environment: Some("test".to_string()),
            console: ConsoleConfig {
                enabled: false,
                colors: false,
                ..ConsoleConfig::default()
            },
            file: None,
            startup_banner: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOG_FILE;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        #[cfg(feature = "file")]
        assert_eq!(config.file.unwrap().path, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.call_site, CallSite::Caller);
        assert!(config.console.enabled);
        assert!(config.startup_banner);
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("LOGWISE_FILE", "/var/log/app.log"),
            ("LOGWISE_COLORS", "false"),
            ("LOGWISE_CALL_SITE", "backtrace"),
        ]));

        assert_eq!(config.file.unwrap().path, PathBuf::from("/var/log/app.log"));
        assert!(!config.console.colors);
        assert_eq!(config.call_site, CallSite::Backtrace);
        assert!(config.load_dotenv);
    }

    #[test]
    fn test_file_can_be_disabled() {
        let config = Config::from_lookup(lookup(&[("LOGWISE_FILE", "off")]));
        assert!(config.file.is_none());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::production().environment.as_deref(), Some("production"));
        assert!(!Config::production().console.colors);
        assert_eq!(Config::development().environment.as_deref(), Some("development"));

        let test = Config::test();
        assert!(!test.console.enabled);
        assert!(test.file.is_none());
        assert!(!test.startup_banner);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(
            r#"{"environment": "prod", "file": {"threshold": "warn"}, "call_site": "off"}"#,
        )
        .unwrap();

        assert_eq!(config.environment.as_deref(), Some("prod"));
        let file = config.file.unwrap();
        assert_eq!(file.path, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(file.threshold, crate::level::Channel::Warn);
        assert_eq!(config.call_site, CallSite::Off);
    }
}
