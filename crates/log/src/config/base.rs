//! Core configuration type

use serde::{Deserialize, Serialize};

use super::{ConsoleConfig, FileConfig};
use crate::format::DEFAULT_TIME_FORMAT;
use crate::location::CallSite;

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Environment name; `None` asks the environment provider
    pub environment: Option<String>,

    /// Load a `.env` file before reading environment variables
    pub load_dotenv: bool,

    /// Console sink
    pub console: ConsoleConfig,

    /// File sink; `None` disables it
    pub file: Option<FileConfig>,

    /// How caller locations are found
    pub call_site: CallSite,

    /// `time` format description for the timestamp column
    pub time_format: String,

    /// Print the unset-environment banner
    pub startup_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: None,
            load_dotenv: false,
            console: ConsoleConfig::default(),
            file: cfg!(feature = "file").then(FileConfig::default),
            call_site: CallSite::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            startup_banner: true,
        }
    }
}
