//! Console sink

use std::io::{self, Write};

use parking_lot::Mutex;

use super::SinkWriter;
use crate::level::Channel;

/// Where console output goes
pub enum ConsoleTarget {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
    /// Any writer; used to capture console output
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl std::fmt::Debug for ConsoleTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleTarget::Stdout => f.write_str("Stdout"),
            ConsoleTarget::Stderr => f.write_str("Stderr"),
            ConsoleTarget::Writer(_) => f.write_str("Writer"),
        }
    }
}

/// Console sink with per-channel colors
#[derive(Debug)]
pub struct ConsoleSink {
    target: ConsoleTarget,
    colors: bool,
}

impl ConsoleSink {
    /// Console sink on stdout
    pub fn stdout(colors: bool) -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            colors,
        }
    }

    /// Console sink on stderr
    pub fn stderr(colors: bool) -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            colors,
        }
    }

    /// Console sink on an arbitrary writer
    pub fn with_writer(writer: impl Write + Send + 'static, colors: bool) -> Self {
        Self {
            target: ConsoleTarget::Writer(Mutex::new(Box::new(writer))),
            colors,
        }
    }

    /// Whether lines are colored
    pub fn colors(&self) -> bool {
        self.colors
    }

    fn paint(&self, channel: Channel, line: &str) -> String {
        if self.colors {
            paint(channel, line)
        } else {
            line.to_string()
        }
    }
}

impl SinkWriter for ConsoleSink {
    fn write(&self, channel: Channel, line: &str) -> io::Result<()> {
        let line = self.paint(channel, line);
        match &self.target {
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{line}"),
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{line}"),
            ConsoleTarget::Writer(writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{line}")?;
                writer.flush()
            }
        }
    }
}

#[cfg(feature = "ansi")]
fn paint(channel: Channel, line: &str) -> String {
    use crate::level::ChannelColor;
    use colored::{Color, Colorize};

    let color = match channel.color() {
        ChannelColor::Green => Color::Green,
        ChannelColor::White => Color::White,
        ChannelColor::Yellow => Color::Yellow,
        ChannelColor::Red => Color::Red,
        ChannelColor::Gray => Color::BrightBlack,
        ChannelColor::Cyan => Color::Cyan,
        ChannelColor::Magenta => Color::Magenta,
        ChannelColor::Blue => Color::Blue,
    };
    line.color(color).to_string()
}

#[cfg(not(feature = "ansi"))]
fn paint(_channel: Channel, line: &str) -> String {
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer that appends into a shared buffer
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    #[test]
    fn test_plain_lines() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::with_writer(buf.clone(), false);

        sink.write(Channel::Info, "first").unwrap();
        sink.write(Channel::Error, "second").unwrap();

        assert_eq!(buf.contents(), "first\nsecond\n");
        assert_eq!(sink.threshold(), None);
    }

    #[cfg(feature = "ansi")]
    #[test]
    fn test_colored_lines() {
        colored::control::set_override(true);
        let buf = SharedBuf::default();
        let sink = ConsoleSink::with_writer(buf.clone(), true);

        sink.write(Channel::Error, "boom").unwrap();

        let out = buf.contents();
        assert!(out.starts_with("\u{1b}[31m"), "{out:?}");
        assert!(out.contains("boom"));
    }
}
