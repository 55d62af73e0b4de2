//! Convenience macros over the global logger
//!
//! Each macro is a no-op until a logger is installed, and formats its
//! arguments only when the channel is enabled.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_text {
    ($method:ident, $channel:ident, $($arg:tt)+) => {
        if let ::std::option::Option::Some(logger) = $crate::global()
            .filter(|logger| logger.is_enabled($crate::Channel::$channel))
        {
            logger.$method(::std::format!($($arg)+));
        }
    };
}

/// Log on the `info` channel
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log_text!(info, Info, $($arg)+) };
}

/// Log on the `success` channel
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => { $crate::__log_text!(success, Success, $($arg)+) };
}

/// Log on the `api` channel
#[macro_export]
macro_rules! api {
    ($($arg:tt)+) => { $crate::__log_text!(api, Api, $($arg)+) };
}

/// Log on the `db` channel
#[macro_export]
macro_rules! db {
    ($($arg:tt)+) => { $crate::__log_text!(db, Db, $($arg)+) };
}

/// Log on the `client` channel
#[macro_export]
macro_rules! client {
    ($($arg:tt)+) => { $crate::__log_text!(client, Client, $($arg)+) };
}

/// Log on the `warn` channel
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__log_text!(warn, Warn, $($arg)+) };
}

/// Log on the `error` channel
///
/// Takes a format string and arguments, or a value (anything
/// `Into<Value>`). A secondary value follows a semicolon:
/// `error!(message; extra)`, see [`Logger::error_with`](crate::Logger::error_with).
#[macro_export]
macro_rules! error {
    ($message:expr; $extra:expr $(;)?) => {
        if let ::std::option::Option::Some(logger) = $crate::global() {
            logger.error_with($message, $extra);
        }
    };
    ($fmt:literal, $($arg:tt)+) => { $crate::__log_text!(error, Error, $fmt, $($arg)+) };
    ($message:expr $(,)?) => {
        if let ::std::option::Option::Some(logger) = $crate::global() {
            logger.error($message);
        }
    };
}

/// Log on the `debug` channel: a value, or a format string and arguments
#[macro_export]
macro_rules! debug {
    ($fmt:literal, $($arg:tt)+) => { $crate::__log_text!(debug, Debug, $fmt, $($arg)+) };
    ($value:expr $(,)?) => {
        if let ::std::option::Option::Some(logger) = $crate::global() {
            logger.debug($value);
        }
    };
}

/// Log on the `verbose` channel: a value, or a format string and arguments
#[macro_export]
macro_rules! verbose {
    ($fmt:literal, $($arg:tt)+) => { $crate::__log_text!(verbose, Verbose, $fmt, $($arg)+) };
    ($value:expr $(,)?) => {
        if let ::std::option::Option::Some(logger) = $crate::global() {
            logger.verbose($value);
        }
    };
}
