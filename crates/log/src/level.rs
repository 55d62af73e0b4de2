//! Channels and the severity tables that rank them
//!
//! A [`Channel`] is a named destination for one kind of message (`info`,
//! `db`, `error`, ...). Which channels exist and in what order is decided
//! once per process by a [`SeverityTable`], chosen from the environment
//! name: production hides the two chattiest channels, every other
//! environment exposes all nine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::LogError;

/// Position of a channel in the active table; `0` is the most severe
pub type Rank = u8;

/// Environment name used when no environment variable is set
pub const UNSET: &str = "unset";

/// Environment names treated as production (compared case-insensitively)
pub const PRODUCTION_ALIASES: [&str; 2] = ["production", "prod"];

/// Logging channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Failures
    Error,
    /// Recoverable problems
    Warn,
    /// Completed operations
    Success,
    /// General information
    Info,
    /// Outbound client traffic (chat bots and similar integrations)
    #[serde(alias = "discord")]
    Client,
    /// HTTP API traffic
    Api,
    /// Database activity
    Db,
    /// Property-level dumps of structured values (development only)
    Verbose,
    /// Shallow dumps of structured values (development only)
    Debug,
}

/// Console color attached to a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelColor {
    /// `success`
    Green,
    /// `info`
    White,
    /// `warn`
    Yellow,
    /// `error`
    Red,
    /// `debug` and `verbose`
    Gray,
    /// `api`
    Cyan,
    /// `db`
    Magenta,
    /// `client`
    Blue,
}

impl Channel {
    /// Every channel, most severe first
    pub const ALL: [Channel; 9] = DEVELOPMENT;

    /// Lowercase channel name
    pub fn name(self) -> &'static str {
        match self {
            Channel::Error => "error",
            Channel::Warn => "warn",
            Channel::Success => "success",
            Channel::Info => "info",
            Channel::Client => "client",
            Channel::Api => "api",
            Channel::Db => "db",
            Channel::Verbose => "verbose",
            Channel::Debug => "debug",
        }
    }

    /// Glyph leading every line of this channel
    pub fn emoji(self) -> &'static str {
        match self {
            Channel::Error => "❌",
            Channel::Warn => "🔶",
            Channel::Success => "✅",
            Channel::Info => "🟢",
            Channel::Client => "🤖",
            Channel::Api => "🚀",
            Channel::Db => "💾",
            Channel::Verbose => "🔍",
            Channel::Debug => "🐞",
        }
    }

    /// Bracketed tag printed after the glyph, if any
    pub fn category(self) -> Option<&'static str> {
        match self {
            Channel::Success => Some("SUCCESS"),
            Channel::Client => Some("CLIENT"),
            Channel::Api => Some("API"),
            Channel::Db => Some("DB"),
            Channel::Verbose => Some("VERBOSE"),
            Channel::Debug => Some("DEBUG"),
            Channel::Error | Channel::Warn | Channel::Info => None,
        }
    }

    /// Console color
    pub fn color(self) -> ChannelColor {
        match self {
            Channel::Error => ChannelColor::Red,
            Channel::Warn => ChannelColor::Yellow,
            Channel::Success => ChannelColor::Green,
            Channel::Info => ChannelColor::White,
            Channel::Client => ChannelColor::Blue,
            Channel::Api => ChannelColor::Cyan,
            Channel::Db => ChannelColor::Magenta,
            Channel::Verbose | Channel::Debug => ChannelColor::Gray,
        }
    }

    /// Whether the channel only exists in the development table
    pub fn is_development_only(self) -> bool {
        matches!(self, Channel::Verbose | Channel::Debug)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Channel::Error),
            "warn" => Ok(Channel::Warn),
            "success" => Ok(Channel::Success),
            "info" => Ok(Channel::Info),
            "client" | "discord" => Ok(Channel::Client),
            "api" => Ok(Channel::Api),
            "db" => Ok(Channel::Db),
            "verbose" => Ok(Channel::Verbose),
            "debug" => Ok(Channel::Debug),
            other => Err(LogError::config(format!("unknown channel '{other}'"))),
        }
    }
}

/// Environment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKind {
    /// `production` or `prod`
    Production,
    /// Anything else, including the unset sentinel
    Development,
}

impl EnvKind {
    /// Classify an environment name
    pub fn classify(env: &str) -> Self {
        let env = env.trim();
        if PRODUCTION_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(env))
        {
            EnvKind::Production
        } else {
            EnvKind::Development
        }
    }
}

const PRODUCTION: [Channel; 7] = [
    Channel::Error,
    Channel::Warn,
    Channel::Success,
    Channel::Info,
    Channel::Client,
    Channel::Api,
    Channel::Db,
];

const DEVELOPMENT: [Channel; 9] = [
    Channel::Error,
    Channel::Warn,
    Channel::Success,
    Channel::Info,
    Channel::Client,
    Channel::Api,
    Channel::Db,
    Channel::Verbose,
    Channel::Debug,
];

/// Ordered channel → rank mapping
///
/// Ranks are the channel's index in the table, so they are contiguous from
/// zero. The production table is a prefix of the development table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityTable {
    kind: EnvKind,
    channels: &'static [Channel],
}

impl SeverityTable {
    /// Seven channels, `error` through `db`
    pub fn production() -> Self {
        Self {
            kind: EnvKind::Production,
            channels: &PRODUCTION,
        }
    }

    /// The production channels plus `verbose` and `debug`
    pub fn development() -> Self {
        Self {
            kind: EnvKind::Development,
            channels: &DEVELOPMENT,
        }
    }

    /// Table for an environment classification
    pub fn for_kind(kind: EnvKind) -> Self {
        match kind {
            EnvKind::Production => Self::production(),
            EnvKind::Development => Self::development(),
        }
    }

    /// Table for an environment name
    pub fn for_environment(env: &str) -> Self {
        Self::for_kind(EnvKind::classify(env))
    }

    /// Environment classification this table was built for
    pub fn kind(&self) -> EnvKind {
        self.kind
    }

    /// Rank of a channel, `None` when the table does not carry it
    pub fn rank(&self, channel: Channel) -> Option<Rank> {
        self.channels
            .iter()
            .position(|c| *c == channel)
            .map(|pos| pos as Rank)
    }

    /// Whether the channel is enabled under this table
    pub fn contains(&self, channel: Channel) -> bool {
        self.rank(channel).is_some()
    }

    /// Least severe rank in the table
    pub fn max_rank(&self) -> Rank {
        (self.channels.len() - 1) as Rank
    }

    /// Channels with their ranks, most severe first
    pub fn iter(&self) -> impl Iterator<Item = (Channel, Rank)> + '_ {
        self.channels
            .iter()
            .enumerate()
            .map(|(rank, channel)| (*channel, rank as Rank))
    }
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self::development()
    }
}
