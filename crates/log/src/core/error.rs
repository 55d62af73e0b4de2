//! Error handling for logwise

use std::io;

/// Result type for fallible logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while building or installing a logger
///
/// Emitting a log line never produces one of these: channel methods absorb
/// every failure so that logging cannot take the calling application down.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The global slot already holds a logger
    #[error("a global logger is already installed")]
    AlreadyInstalled,

    /// An installed binding was asked to change
    #[error("modification of the installed logger is not permitted")]
    ModificationNotPermitted,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl LogError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error comes from a second write to an install-once slot
    pub fn is_registration_conflict(&self) -> bool {
        matches!(self, Self::AlreadyInstalled | Self::ModificationNotPermitted)
    }
}
