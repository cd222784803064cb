//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They forward to
//! [`Logger::log`](crate::Logger::log) with no fields; attach fields with
//! the method API when you need them.
//!
//! # Examples
//!
//! ```
//! use fieldlog::prelude::*;
//! use fieldlog::info;
//!
//! let logger = StdLogger::default();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let logger = StdLogger::default();
/// use fieldlog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+), &[])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let logger = StdLogger::new(Config { level: Level::Debug, ..Config::default() });
/// use fieldlog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let logger = StdLogger::default();
/// use fieldlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let logger = StdLogger::default();
/// use fieldlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let logger = StdLogger::default();
/// use fieldlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// After the entry is written the logger's fatal effect runs, which exits
/// the process unless a replacement handler was installed.
///
/// # Examples
///
/// ```no_run
/// # use fieldlog::prelude::*;
/// # let logger = StdLogger::default();
/// use fieldlog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
