//! Install-once process-wide logger
//!
//! The first installation binds the logger for the life of the process.
//! A second attempt is an error ([`install`]) or a warning through the
//! logger already bound ([`install_or_warn`]); neither replaces it.

use std::sync::OnceLock;

use crate::builder::LoggerBuilder;
use crate::config::Config;
use crate::core::{LogError, LogResult};
use crate::logger::Logger;

/// Emitted on the `warn` channel when a second logger is offered
pub const ALREADY_REGISTERED: &str = "Logwise already registered globally!";

/// Write-once slot
#[derive(Debug)]
pub struct Registrar<T> {
    slot: OnceLock<T>,
}

impl<T> Default for Registrar<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registrar<T> {
    /// Empty slot
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Bind `value` if the slot is empty
    ///
    /// # Errors
    ///
    /// [`LogError::AlreadyInstalled`] when a value is already bound; the
    /// offered value is dropped.
    pub fn install(&self, value: T) -> LogResult<&T> {
        let mut fresh = false;
        let bound = self.slot.get_or_init(|| {
            fresh = true;
            value
        });
        if fresh {
            Ok(bound)
        } else {
            Err(LogError::AlreadyInstalled)
        }
    }

    /// Like [`install`](Self::install), but reports the conflict as an
    /// attempt to modify the bound value
    ///
    /// # Errors
    ///
    /// [`LogError::ModificationNotPermitted`] when a value is already bound.
    pub fn replace(&self, value: T) -> LogResult<&T> {
        self.install(value)
            .map_err(|_| LogError::ModificationNotPermitted)
    }

    /// Bound value, if any
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Whether a value is bound
    pub fn is_installed(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl Registrar<Logger> {
    /// Bind `logger`, or warn through the bound logger and keep it
    #[track_caller]
    pub fn install_or_warn(&self, logger: Logger) -> &Logger {
        let mut fresh = false;
        let bound = self.slot.get_or_init(|| {
            fresh = true;
            logger
        });
        if !fresh {
            bound.warn(ALREADY_REGISTERED);
        }
        bound
    }
}

static GLOBAL: Registrar<Logger> = Registrar::new();

/// Install the process-wide logger
///
/// # Errors
///
/// [`LogError::AlreadyInstalled`] when one is already installed.
pub fn install(logger: Logger) -> LogResult<&'static Logger> {
    GLOBAL.install(logger)
}

/// Install the process-wide logger, or warn and keep the existing one
#[deprecated(note = "use `install`, which reports a second installation as an error")]
#[track_caller]
pub fn install_or_warn(logger: Logger) -> &'static Logger {
    GLOBAL.install_or_warn(logger)
}

/// Process-wide logger, if installed
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Build a logger from [`Config::from_env`] and install it
///
/// # Errors
///
/// Fails when the logger cannot be built or one is already installed.
pub fn init() -> LogResult<&'static Logger> {
    init_with(Config::from_env())
}

/// Build a logger from `config` and install it
///
/// # Errors
///
/// Fails when the logger cannot be built or one is already installed.
pub fn init_with(config: Config) -> LogResult<&'static Logger> {
    install(LoggerBuilder::from_config(config).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn logger(sink: &MemorySink) -> Logger {
        let config = Config {
            environment: Some("production".to_string()),
            ..Config::test()
        };
        LoggerBuilder::from_config(config)
            .sink(sink.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_install_then_conflict() {
        let registrar = Registrar::new();
        assert!(registrar.install(1).is_ok());
        assert!(matches!(registrar.install(2), Err(LogError::AlreadyInstalled)));
        assert_eq!(registrar.get(), Some(&1));
    }

    #[test]
    fn test_replace_is_not_permitted() {
        let registrar = Registrar::new();
        assert_eq!(registrar.replace("first").copied().ok(), Some("first"));
        assert!(matches!(
            registrar.replace("second"),
            Err(LogError::ModificationNotPermitted)
        ));
        assert_eq!(registrar.get(), Some(&"first"));
    }

    #[test]
    fn test_empty_registrar() {
        let registrar: Registrar<Logger> = Registrar::default();
        assert!(registrar.get().is_none());
        assert!(!registrar.is_installed());
    }

    #[test]
    fn test_install_or_warn_keeps_first() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let registrar = Registrar::new();

        registrar.install_or_warn(logger(&first));
        let line = line!() + 1;
        let kept = registrar.install_or_warn(logger(&second));

        kept.info("after");
        let lines = first.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(ALREADY_REGISTERED), "{}", lines[0]);
        assert!(lines[0].contains(&format!("| registry.rs:{line} ")), "{}", lines[0]);
        assert!(second.lines().is_empty());
    }
}
