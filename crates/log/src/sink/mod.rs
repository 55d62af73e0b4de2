//! Sink implementations
//!
//! A sink receives fully rendered lines. The logger decides *whether* a
//! line is written; a sink only decides *how*. Sinks serialize their own
//! writes so that concurrent callers never interleave within a line.

mod console;
#[cfg(feature = "file")]
mod file;
mod memory;

pub use console::{ConsoleSink, ConsoleTarget};
#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;

use std::io;

use crate::level::Channel;

/// Destination for rendered lines
pub trait SinkWriter: Send + Sync {
    /// Write one line. The line carries no trailing newline.
    fn write(&self, channel: Channel, line: &str) -> io::Result<()>;

    /// Least severe channel this sink accepts; `None` accepts every
    /// enabled channel
    fn threshold(&self) -> Option<Channel> {
        None
    }
}
