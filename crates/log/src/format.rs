//! Line formatting (timestamp, prefix, table layout)

use time::OffsetDateTime;
use time::format_description::OwnedFormatItem;

use crate::core::{LogError, LogResult};
use crate::level::Channel;

/// Default timestamp layout
pub const DEFAULT_TIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

const TIMESTAMP_WIDTH: usize = 20;
const LEVEL_WIDTH: usize = 7;
const LOCATION_WIDTH: usize = 25;
const TAG_WIDTH: usize = 10;

/// Glyph slot width, in UTF-16 code units
const GLYPH_UNITS: usize = 4;
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Render one line: `timestamp | LEVEL | location | message`.
///
/// The first three columns are left-aligned and padded to 20, 7 and 25
/// characters. The message is appended as-is, embedded newlines included.
pub fn render(timestamp: &str, level: &str, message: &str, location: &str) -> String {
    format!(
        "{timestamp:<tw$} | {level:<lw$} | {location:<cw$} | {message}",
        level = level.to_uppercase(),
        tw = TIMESTAMP_WIDTH,
        lw = LEVEL_WIDTH,
        cw = LOCATION_WIDTH,
    )
}

/// Channel prefix: the glyph padded with zero-width spaces to a fixed slot,
/// two spaces, then the `[CATEGORY]` tag padded to 10 characters if any.
pub fn prefix(emoji: &str, category: Option<&str>) -> String {
    let mut out = String::with_capacity(32);
    out.push_str(emoji);
    out.push(ZERO_WIDTH_SPACE);

    let mut units = emoji.encode_utf16().count() + 1;
    while units < GLYPH_UNITS {
        out.push(ZERO_WIDTH_SPACE);
        units += 1;
    }
    out.push_str("  ");

    if let Some(category) = category {
        let tag = format!("[{category}]");
        out.push_str(&format!("{tag:<width$}", width = TAG_WIDTH));
    }
    out
}

/// Prefix for a channel
pub fn channel_prefix(channel: Channel) -> String {
    prefix(channel.emoji(), channel.category())
}

/// Timestamp formatter
#[derive(Debug, Clone)]
pub struct Timestamp {
    format: OwnedFormatItem,
}

impl Timestamp {
    /// Parse a `time` format description
    pub fn new(description: &str) -> LogResult<Self> {
        let format = time::format_description::parse_owned::<1>(description)
            .map_err(|e| LogError::config(format!("invalid time format '{description}': {e}")))?;
        Ok(Self { format })
    }

    /// Current local time, UTC when the local offset is unknown
    pub fn now(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        self.format(now)
    }

    /// Format a specific instant
    pub fn format(&self, at: OffsetDateTime) -> String {
        at.format(&self.format).unwrap_or_default()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self {
            format: time::format_description::parse_owned::<1>(DEFAULT_TIME_FORMAT)
                .unwrap_or_else(|_| OwnedFormatItem::Compound(Box::new([]))),
        }
    }
}

/// One log line before rendering; built and consumed within a single call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Formatted timestamp
    pub timestamp: String,
    /// Channel the line belongs to
    pub channel: Channel,
    /// `file:line` of the caller, possibly empty
    pub location: String,
    /// Glyph and tag
    pub prefix: String,
    /// Message body
    pub body: String,
}

impl LogRecord {
    /// Final text of the line
    pub fn render(&self) -> String {
        let message = format!("{}{}", self.prefix, self.body);
        render(&self.timestamp, self.channel.name(), &message, &self.location)
    }
}
