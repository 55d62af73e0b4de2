//! Environment signal
//!
//! The active severity table is chosen once, from a single environment
//! name. [`ProcessEnvironment`] reads it from the first non-empty variable
//! of [`ENV_KEYS`], optionally after loading a `.env` file; when none is
//! set the name is [`UNSET`], which selects the development table and
//! prints a one-time banner.

use std::fmt;
use std::sync::Once;

use crate::level::UNSET;

/// Variables consulted for the environment name, in order
pub const ENV_KEYS: [&str; 5] = ["LOGWISE_ENV", "RUST_ENV", "APP_ENV", "ENVIRONMENT", "STAGE"];

/// Source of the environment name
pub trait EnvironmentProvider: Send + Sync {
    /// Current environment name; [`UNSET`] when none is declared
    fn current_environment(&self) -> String;
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the environment name from process variables
pub struct ProcessEnvironment {
    keys: Vec<String>,
    load_dotenv: bool,
    lookup: Lookup,
}

impl fmt::Debug for ProcessEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessEnvironment")
            .field("keys", &self.keys)
            .field("load_dotenv", &self.load_dotenv)
            .finish_non_exhaustive()
    }
}

impl Default for ProcessEnvironment {
    fn default() -> Self {
        Self {
            keys: ENV_KEYS.iter().map(|k| (*k).to_string()).collect(),
            load_dotenv: false,
            lookup: Box::new(|key| std::env::var(key).ok()),
        }
    }
}

impl ProcessEnvironment {
    /// Read [`ENV_KEYS`] from the process environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` from the working directory (or its parents) first
    #[must_use]
    pub fn with_dotenv(mut self, load: bool) -> Self {
        self.load_dotenv = load;
        self
    }

    /// Replace the variable names consulted
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the variable lookup
    #[must_use]
    pub fn with_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.lookup = Box::new(lookup);
        self
    }
}

impl EnvironmentProvider for ProcessEnvironment {
    fn current_environment(&self) -> String {
        if self.load_dotenv {
            // A missing .env file is the normal case
            let _ = dotenv::dotenv();
        }

        self.keys
            .iter()
            .filter_map(|key| (self.lookup)(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| UNSET.to_string())
    }
}

/// Fixed environment name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEnvironment(pub String);

impl StaticEnvironment {
    /// Wrap a name
    pub fn new(env: impl Into<String>) -> Self {
        Self(env.into())
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn current_environment(&self) -> String {
        self.0.clone()
    }
}

/// Whether an environment name is the unset sentinel
pub fn is_unset(env: &str) -> bool {
    env.trim().eq_ignore_ascii_case(UNSET)
}

/// Printed once per process when no environment is declared
pub const UNSET_BANNER: &str = "\
█████████████████████████████████████████████████████████████████
█ ⚠️  WARNING! NO WORKING ENVIRONMENT VARIABLE IS SET            █
█ DEBUG and VERBOSE are enabled only because of this default    █
█ Set LOGWISE_ENV (or RUST_ENV, APP_ENV, ENVIRONMENT, STAGE)    █
█ to `production` to disable them                               █
█████████████████████████████████████████████████████████████████";

static BANNER: Once = Once::new();

/// Print [`UNSET_BANNER`] to stderr the first time an unset environment
/// is seen. Returns whether this call printed it.
pub(crate) fn warn_if_unset(env: &str) -> bool {
    if !is_unset(env) {
        return false;
    }

    let mut printed = false;
    BANNER.call_once(|| {
        eprintln!("{UNSET_BANNER}");
        printed = true;
    });
    printed
}
