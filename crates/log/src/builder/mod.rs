//! Logger builder implementation
//!
//! Turns a [`Config`] plus optional extra sinks and an environment provider
//! into a [`Logger`]. The environment is read exactly once, here.

use std::sync::Arc;

use crate::config::{Config, ConsoleStream};
use crate::core::LogResult;
use crate::env::{self, EnvironmentProvider, ProcessEnvironment};
use crate::format::Timestamp;
use crate::logger::Logger;
use crate::sink::{ConsoleSink, SinkWriter};

/// Logger builder
pub struct LoggerBuilder {
    config: Config,
    provider: Option<Box<dyn EnvironmentProvider>>,
    sinks: Vec<Arc<dyn SinkWriter>>,
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Builder over [`Config::default`]
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Create builder from config
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            provider: None,
            sinks: Vec::new(),
        }
    }

    /// Read the environment name from `provider`.
    ///
    /// Ignored when the config names an environment.
    #[must_use]
    pub fn environment(mut self, provider: impl EnvironmentProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Add a sink next to the configured ones
    #[must_use]
    pub fn sink(self, sink: impl SinkWriter + 'static) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    /// Add a sink that is also held elsewhere
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn SinkWriter>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Build the logger
    ///
    /// # Errors
    ///
    /// Fails on an invalid time format, or when the log file cannot be
    /// opened.
    pub fn build(self) -> LogResult<Logger> {
        let config = self.config;
        let timestamp = Timestamp::new(&config.time_format)?;

        let environment = match (config.environment.clone(), self.provider) {
            (Some(name), _) => name,
            (None, Some(provider)) => provider.current_environment(),
            (None, None) => ProcessEnvironment::new()
                .with_dotenv(config.load_dotenv)
                .current_environment(),
        };
        if config.startup_banner {
            env::warn_if_unset(&environment);
        }

        let mut sinks: Vec<Arc<dyn SinkWriter>> = Vec::new();
        if config.console.enabled {
            sinks.push(Arc::new(match config.console.stream {
                ConsoleStream::Stdout => ConsoleSink::stdout(config.console.colors),
                ConsoleStream::Stderr => ConsoleSink::stderr(config.console.colors),
            }));
        }
        if let Some(file) = &config.file {
            sinks.push(file_sink(file)?);
        }
        sinks.extend(self.sinks);

        Ok(Logger::new(environment, sinks, config.call_site, timestamp))
    }
}

#[cfg(feature = "file")]
fn file_sink(file: &crate::config::FileConfig) -> LogResult<Arc<dyn SinkWriter>> {
    Ok(Arc::new(crate::sink::FileSink::open(&file.path, file.threshold)?))
}

#[cfg(not(feature = "file"))]
fn file_sink(_: &crate::config::FileConfig) -> LogResult<Arc<dyn SinkWriter>> {
    Err(crate::core::LogError::config(
        "file sink requested but the `file` feature is disabled",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnvironment;
    use crate::level::{Channel, EnvKind};
    use crate::sink::MemorySink;

    #[test]
    fn test_config_environment_wins() {
        let logger = LoggerBuilder::from_config(Config::production())
            .environment(StaticEnvironment::new("development"))
            .build()
            .unwrap();
        assert_eq!(logger.environment(), "production");
        assert_eq!(logger.table().kind(), EnvKind::Production);
    }

    #[test]
    fn test_provider_used_without_config_environment() {
        let config = Config {
            environment: None,
            ..Config::test()
        };
        let logger = LoggerBuilder::from_config(config)
            .environment(StaticEnvironment::new("PROD"))
            .build()
            .unwrap();
        assert!(!logger.is_enabled(Channel::Debug));
    }

    #[test]
    fn test_extra_sinks_receive_lines() {
        let sink = MemorySink::new();
        let logger = LoggerBuilder::from_config(Config::test())
            .sink(sink.clone())
            .build()
            .unwrap();

        logger.info("hello");
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_invalid_time_format() {
        let config = Config {
            time_format: "[bogus]".to_string(),
            ..Config::test()
        };
        assert!(LoggerBuilder::from_config(config).build().is_err());
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_file_sink_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("server.log");
        let mut config = Config::production();
        config.file = Some(crate::config::FileConfig::at(&path));
        config.console.enabled = false;
        config.startup_banner = false;

        let logger = LoggerBuilder::from_config(config).build().unwrap();
        logger.db("select 1");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[DB]"));
        assert!(contents.ends_with('\n'));
    }
}
