//! Call-site resolution
//!
//! Every line carries the `file:line` of the code that asked for it. The
//! cheap way is `#[track_caller]`, which the channel methods use by default.
//! The stack-walking way captures a backtrace and picks the first frame that
//! belongs to neither this crate, a transport library nor a dependency.
//!
//! Resolution never fails loudly: anything unexpected yields an empty
//! string and the line is rendered with a blank location column.

use std::backtrace::Backtrace;
use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Frames mentioning these belong to the logger itself
const INTERNAL_MARKERS: [&str; 3] = ["logwise::", "/logwise-", "/logwise/src/"];

/// Frames mentioning these belong to log transport code
const TRANSPORT_MARKERS: [&str; 3] = ["tracing::", "tracing_core::", "tracing_subscriber::"];

/// Path segments of code we did not write
const DEPENDENCY_MARKERS: [&str; 4] = [".cargo/registry", ".cargo/git", "/rustc/", "node_modules"];

/// How a logger finds the location of its caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallSite {
    /// `#[track_caller]` location of the channel call
    #[default]
    Caller,
    /// Walk a captured backtrace
    Backtrace,
    /// Leave the location column empty
    Off,
}

impl CallSite {
    /// Resolve the location for one call
    pub(crate) fn resolve(self, caller: &Location<'_>) -> String {
        match self {
            CallSite::Caller => from_caller(caller),
            CallSite::Backtrace => capture(),
            CallSite::Off => String::new(),
        }
    }
}

/// `basename:line` of a tracked caller
pub fn from_caller(location: &Location<'_>) -> String {
    format!("{}:{}", basename(location.file()), location.line())
}

/// Capture the current stack and resolve the external caller from it
pub fn capture() -> String {
    resolve_stack(&Backtrace::force_capture().to_string())
}

/// Pick the external caller out of a textual stack trace
///
/// Accepts Rust backtraces (`N: symbol` followed by `at file:line:col`) as
/// well as single-line frames shaped `at symbol (file:line:col)` or
/// `at file:line:col`. Returns `basename:line`, or an empty string when no
/// frame qualifies.
pub fn resolve_stack(stack: &str) -> String {
    frames(stack)
        .into_iter()
        .find(Frame::is_external)
        .and_then(|frame| parse_location(frame.location))
        .map(|(path, line)| format!("{}:{line}", basename(path)))
        .unwrap_or_default()
}

#[derive(Debug)]
struct Frame<'a> {
    symbol: &'a str,
    location: &'a str,
}

impl Frame<'_> {
    fn is_external(&self) -> bool {
        let mentions = |marker: &&str| self.symbol.contains(marker) || self.location.contains(marker);

        !INTERNAL_MARKERS.iter().any(mentions)
            && !TRANSPORT_MARKERS.iter().any(mentions)
            && !DEPENDENCY_MARKERS.iter().any(mentions)
    }
}

/// Split a stack trace into frames that carry a source location.
/// Header lines and symbol-only frames are dropped.
fn frames(stack: &str) -> Vec<Frame<'_>> {
    let mut frames = Vec::new();
    let mut pending: Option<&str> = None;

    for line in stack.lines().map(str::trim) {
        if line.starts_with("at ") {
            match pending.take() {
                Some(symbol) => frames.push(Frame {
                    symbol,
                    location: line,
                }),
                None => frames.push(Frame {
                    symbol: line,
                    location: line,
                }),
            }
        } else if let Some(symbol) = numbered_symbol(line) {
            pending = Some(symbol);
        } else {
            pending = None;
        }
    }

    frames
}

/// `"12: app::main"` → `"app::main"`
fn numbered_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.split_once(':')?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(symbol.trim())
}

/// Extract `(path, line)` from `... (path:line:col)` or `at path:line:col`
fn parse_location(text: &str) -> Option<(&str, u32)> {
    let text = text.trim();
    let spec = match text.strip_suffix(')') {
        Some(head) => &head[head.rfind('(')? + 1..],
        None => text.strip_prefix("at ")?.trim(),
    };

    let mut parts = spec.rsplitn(3, ':');
    let column = parts.next()?;
    let line = parts.next()?;
    let path = parts.next()?;

    column.parse::<u32>().ok()?;
    let line = line.parse::<u32>().ok()?;
    (!path.is_empty()).then_some((path, line))
}

pub(crate) fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
