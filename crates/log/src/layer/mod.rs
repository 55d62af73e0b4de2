//! Tracing integration
//!
//! [`ChannelLayer`] lets code instrumented with `tracing` write through a
//! [`Logger`](crate::Logger): events are mapped to channels by level and
//! rendered in the same line format as direct calls.

mod channel;
mod fields;

pub use channel::{ChannelLayer, channel_for};
