//! Sink configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::Channel;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "logs/server.log";

/// Console stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    /// Write to stdout
    #[default]
    Stdout,
    /// Write to stderr
    Stderr,
}

/// Console sink configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Attach a console sink at all
    pub enabled: bool,
    /// Output stream
    pub stream: ConsoleStream,
    /// Use ANSI colors
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stream: ConsoleStream::Stdout,
            colors: cfg!(feature = "ansi") && std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// File sink configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path of the log file
    pub path: PathBuf,
    /// Least severe channel persisted
    pub threshold: Channel,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            threshold: Channel::Db,
        }
    }
}

impl FileConfig {
    /// File sink at `path` with the default threshold
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}
