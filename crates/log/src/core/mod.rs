//! Core components shared across the crate.
//!
//! ### [`error`] - Error handling
//! The [`LogError`] enum and the [`LogResult`] alias returned by every
//! fallible setup operation. The channel methods themselves never fail.

pub mod error;

pub use error::{LogError, LogResult};
