//! Level-to-channel bridge

use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::fields::FieldCollector;
use crate::level::Channel;
use crate::location::basename;
use crate::logger::Logger;

/// Channel an event of `level` is written to
pub const fn channel_for(level: &Level) -> Channel {
    match *level {
        Level::ERROR => Channel::Error,
        Level::WARN => Channel::Warn,
        Level::INFO => Channel::Info,
        Level::DEBUG => Channel::Debug,
        Level::TRACE => Channel::Verbose,
    }
}

#[derive(Debug, Clone)]
enum Target {
    Global,
    Owned(Arc<Logger>),
}

/// Tracing layer that forwards events to a [`Logger`]
///
/// The location column is the event's `file:line`. Events on channels the
/// logger's table does not carry are dropped before their fields are read.
#[derive(Debug, Clone)]
pub struct ChannelLayer {
    target: Target,
}

impl ChannelLayer {
    /// Forward to a specific logger
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            target: Target::Owned(logger),
        }
    }

    /// Forward to whatever logger is installed globally at event time;
    /// events before installation are dropped
    pub fn global() -> Self {
        Self {
            target: Target::Global,
        }
    }

    fn logger(&self) -> Option<&Logger> {
        match &self.target {
            Target::Global => crate::registry::global(),
            Target::Owned(logger) => Some(logger.as_ref()),
        }
    }
}

impl<S: Subscriber> Layer<S> for ChannelLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(logger) = self.logger() else {
            return;
        };
        let metadata = event.metadata();
        let channel = channel_for(metadata.level());
        if !logger.is_enabled(channel) {
            return;
        }

        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => format!("{}:{line}", basename(file)),
            _ => String::new(),
        };
        logger.log_at(channel, &location, &collector.finish());
    }
}
