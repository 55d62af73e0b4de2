//! Configuration types and presets
//!
//! This module provides configuration types for the logger, organized into:
//! - `base`: the top-level [`Config`]
//! - `writer`: console and file sink configuration
//! - `presets`: pre-configured setups (from environment, development, production, test)

mod base;
mod presets;
mod writer;

pub use base::Config;
pub use writer::{ConsoleConfig, ConsoleStream, DEFAULT_LOG_FILE, FileConfig};
