//! In-memory sink

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use super::SinkWriter;
use crate::level::Channel;

/// Keeps every line in memory. Clones share the same buffer, so a clone
/// handed to a logger can be inspected through the original.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Channel, String)>>>,
    threshold: Option<Channel>,
}

impl MemorySink {
    /// Sink accepting every enabled channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink accepting channels ranked at or above `threshold`
    pub fn with_threshold(threshold: Channel) -> Self {
        Self {
            threshold: Some(threshold),
            ..Self::default()
        }
    }

    /// Captured lines with their channels
    pub fn entries(&self) -> Vec<(Channel, String)> {
        self.lines.lock().clone()
    }

    /// Captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// Channels of the captured lines, in order
    pub fn channels(&self) -> Vec<Channel> {
        self.lines.lock().iter().map(|(channel, _)| *channel).collect()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl SinkWriter for MemorySink {
    fn write(&self, channel: Channel, line: &str) -> io::Result<()> {
        self.lines.lock().push((channel, line.to_string()));
        Ok(())
    }

    fn threshold(&self) -> Option<Channel> {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::with_threshold(Channel::Db);
        let handle = sink.clone();

        handle.write(Channel::Api, "GET /").unwrap();

        assert_eq!(sink.entries(), vec![(Channel::Api, "GET /".to_string())]);
        assert_eq!(sink.threshold(), Some(Channel::Db));

        sink.clear();
        assert!(handle.lines().is_empty());
    }
}
