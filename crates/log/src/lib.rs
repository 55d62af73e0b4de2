//! # Logwise - channel-based logging
//!
//! Nine fixed channels (`error`, `warn`, `success`, `info`, `client`,
//! `api`, `db`, `verbose`, `debug`) rendered as aligned, glyph-prefixed
//! lines with the caller's `file:line`. The environment picks the severity
//! table once: production drops `verbose` and `debug`, everything else
//! (including no environment at all) keeps them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logwise::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     logwise::init()?;
//!
//!     info!("server listening on {}", 8080);
//!     db!("migrations applied");
//!     error!("upstream timed out");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;
mod env;
pub mod format;
mod layer;
mod level;
mod location;
mod logger;
mod macros;
mod registry;
pub mod sink;
pub mod value;

// Public API
pub use builder::LoggerBuilder;
pub use config::{Config, ConsoleConfig, ConsoleStream, DEFAULT_LOG_FILE, FileConfig};
pub use crate::core::{LogError, LogResult};
pub use env::{
    ENV_KEYS, EnvironmentProvider, ProcessEnvironment, StaticEnvironment, UNSET_BANNER, is_unset,
};
pub use format::{DEFAULT_TIME_FORMAT, LogRecord, Timestamp};
pub use layer::{ChannelLayer, channel_for};
pub use level::{Channel, ChannelColor, EnvKind, PRODUCTION_ALIASES, Rank, SeverityTable, UNSET};
pub use location::{CallSite, capture, from_caller, resolve_stack};
pub use logger::Logger;
#[allow(deprecated)]
pub use registry::{
    ALREADY_REGISTERED, Registrar, global, init, init_with, install, install_or_warn,
};
pub use value::Value;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Channel, Config, LogError, LogResult, Logger, LoggerBuilder, Value, api, client, db,
        debug, error, global, info, init, init_with, install, success, verbose, warn,
    };
}
