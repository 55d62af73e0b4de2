//! Append-only file sink

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use super::SinkWriter;
use crate::core::{LogError, LogResult};
use crate::level::Channel;

/// Appends lines to a single file that is never rotated
pub struct FileSink {
    appender: Mutex<RollingFileAppender>,
    path: PathBuf,
    threshold: Channel,
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &self.path)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl FileSink {
    /// Open (or create) the file, creating its parent directory if needed.
    /// Only channels ranked at or above `threshold` are written.
    pub fn open(path: impl AsRef<Path>, threshold: Channel) -> LogResult<Self> {
        let path = path.as_ref();
        let file_name = path.file_name().ok_or_else(|| {
            LogError::config(format!(
                "Invalid file path (no filename): '{}'",
                path.display()
            ))
        })?;
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name.to_string_lossy())
            .build(dir)
            .map_err(|e| {
                LogError::config(format!("cannot open log file '{}': {e}", path.display()))
            })?;

        Ok(Self {
            appender: Mutex::new(appender),
            path: path.to_path_buf(),
            threshold,
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SinkWriter for FileSink {
    fn write(&self, _channel: Channel, line: &str) -> io::Result<()> {
        let mut appender = self.appender.lock();
        appender.write_all(format!("{line}\n").as_bytes())?;
        appender.flush()
    }

    fn threshold(&self) -> Option<Channel> {
        Some(self.threshold)
    }
}
