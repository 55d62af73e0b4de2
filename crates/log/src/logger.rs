//! Logger façade
//!
//! A [`Logger`] owns the severity table, the sinks and the line format. Each
//! channel method gates first, so a channel missing from the active table
//! costs a table lookup and nothing else: no location capture, no
//! serialization, no I/O.
//!
//! Sinks may fail, the logger never does. A failed write is counted and the
//! caller carries on.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::builder::LoggerBuilder;
use crate::format::{LogRecord, Timestamp, channel_prefix};
use crate::level::{Channel, Rank, SeverityTable};
use crate::location::CallSite;
use crate::sink::SinkWriter;
use crate::value::{TypedValue, Value, debug_entries, inspect};

/// Channel-based logger
pub struct Logger {
    environment: String,
    table: SeverityTable,
    sinks: Vec<Arc<dyn SinkWriter>>,
    call_site: CallSite,
    timestamp: Timestamp,
    write_failures: AtomicU64,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("environment", &self.environment)
            .field("table", &self.table.kind())
            .field("sinks", &self.sinks.len())
            .field("call_site", &self.call_site)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Start building a logger from the default configuration
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn new(
        environment: String,
        sinks: Vec<Arc<dyn SinkWriter>>,
        call_site: CallSite,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            table: SeverityTable::for_environment(&environment),
            environment,
            sinks,
            call_site,
            timestamp,
            write_failures: AtomicU64::new(0),
        }
    }

    /// Environment name the table was chosen from
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Active severity table
    pub fn table(&self) -> &SeverityTable {
        &self.table
    }

    /// Whether a channel produces output at all
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.table.contains(channel)
    }

    /// Number of sink writes that failed so far
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// General information
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.text(Channel::Info, message.as_ref(), Location::caller());
    }

    /// Completed operations
    #[track_caller]
    pub fn success(&self, message: impl AsRef<str>) {
        self.text(Channel::Success, message.as_ref(), Location::caller());
    }

    /// HTTP traffic
    #[track_caller]
    pub fn api(&self, message: impl AsRef<str>) {
        self.text(Channel::Api, message.as_ref(), Location::caller());
    }

    /// Database activity
    #[track_caller]
    pub fn db(&self, message: impl AsRef<str>) {
        self.text(Channel::Db, message.as_ref(), Location::caller());
    }

    /// Chat client (Discord) activity
    #[track_caller]
    pub fn client(&self, message: impl AsRef<str>) {
        self.text(Channel::Client, message.as_ref(), Location::caller());
    }

    /// Recoverable problems
    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.text(Channel::Warn, message.as_ref(), Location::caller());
    }

    /// Any channel, by value
    #[track_caller]
    pub fn log(&self, channel: Channel, message: impl AsRef<str>) {
        self.text(channel, message.as_ref(), Location::caller());
    }

    /// Failures. Structured messages are rendered as indented JSON.
    #[track_caller]
    pub fn error(&self, message: impl Into<Value>) {
        let caller = Location::caller();
        self.dispatch(Channel::Error, caller, || error_body(&message.into(), None));
    }

    /// Failure with a secondary object.
    ///
    /// The secondary value is never rendered: when it is supplied the line
    /// reads `message | message`. [`Value::Absent`] counts as not supplied,
    /// and an empty message stays empty.
    #[track_caller]
    pub fn error_with(&self, message: impl Into<Value>, extra: impl Into<Value>) {
        let caller = Location::caller();
        self.dispatch(Channel::Error, caller, || {
            error_body(&message.into(), Some(&extra.into()))
        });
    }

    /// Shallow per-key listing of structured input; strings verbatim
    #[track_caller]
    pub fn debug(&self, message: impl Into<Value>) {
        let caller = Location::caller();
        self.dispatch(Channel::Debug, caller, || debug_body(&message.into()));
    }

    /// Per-property inspection of structured input; strings verbatim
    #[track_caller]
    pub fn verbose(&self, message: impl Into<Value>) {
        let caller = Location::caller();
        self.dispatch(Channel::Verbose, caller, || verbose_body(&message.into()));
    }

    /// Write a pre-formatted body with an explicit location
    pub fn log_at(&self, channel: Channel, location: &str, body: &str) {
        if let Some(rank) = self.table.rank(channel) {
            self.write(channel, rank, location.to_string(), body.to_string());
        }
    }

    fn text(&self, channel: Channel, message: &str, caller: &Location<'_>) {
        self.dispatch(channel, caller, || message.to_string());
    }

    fn dispatch(&self, channel: Channel, caller: &Location<'_>, body: impl FnOnce() -> String) {
        let Some(rank) = self.table.rank(channel) else {
            return;
        };
        let location = self.call_site.resolve(caller);
        self.write(channel, rank, location, body());
    }

    fn write(&self, channel: Channel, rank: Rank, location: String, body: String) {
        let record = LogRecord {
            timestamp: self.timestamp.now(),
            channel,
            location,
            prefix: channel_prefix(channel),
            body,
        };
        let line = record.render();

        for sink in self.sinks.iter().filter(|sink| self.admits(sink.as_ref(), rank)) {
            if sink.write(channel, &line).is_err() {
                self.write_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// A sink takes every rank up to its threshold's rank. A threshold
    /// channel missing from the table places no limit.
    fn admits(&self, sink: &dyn SinkWriter, rank: Rank) -> bool {
        sink.threshold()
            .and_then(|threshold| self.table.rank(threshold))
            .is_none_or(|limit| rank <= limit)
    }
}

fn error_body(message: &Value, extra: Option<&Value>) -> String {
    let text = match message {
        Value::Null | Value::Sequence(_) | Value::Keyed { .. } => message.to_pretty_json(),
        other => other.coerce_to_string(),
    };

    match extra {
        Some(extra) if *extra != Value::Absent && !text.is_empty() => format!("{text} | {text}"),
        _ => text,
    }
}

fn debug_body(message: &Value) -> String {
    match message {
        Value::String(text) => text.clone(),
        other => to_pretty(&debug_entries(other), other),
    }
}

fn verbose_body(message: &Value) -> String {
    match message {
        Value::String(text) => text.clone(),
        other if other.is_structured() => to_pretty(&inspect(other), other),
        other => to_pretty(&TypedValue::of(other), other),
    }
}

fn to_pretty<T: serde::Serialize + ?Sized>(projection: &T, original: &Value) -> String {
    serde_json::to_string_pretty(projection).unwrap_or_else(|_| original.coerce_to_string())
}
