//! Process-wide default logger
//!
//! Holds one shared logger handle behind a read-write lock, built lazily
//! with the default configuration. The crate-level helper functions log
//! through whatever logger the slot currently holds.

use crate::core::{Context, Field, Logger, StdLogger};
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

static DEFAULT_LOGGER: LazyLock<RwLock<Arc<dyn Logger>>> =
    LazyLock::new(|| RwLock::new(Arc::new(StdLogger::default())));

/// Current process-wide default logger
pub fn default_logger() -> Arc<dyn Logger> {
    Arc::clone(&DEFAULT_LOGGER.read())
}

/// Replace the process-wide default logger.
///
/// Callers that already hold a handle from [`default_logger`] keep logging
/// through the old instance; only subsequent lookups see the replacement.
pub fn set_default_logger(logger: Arc<dyn Logger>) {
    *DEFAULT_LOGGER.write() = logger;
}

/// Log at debug level through the default logger
pub fn debug(message: &str, fields: &[Field]) {
    default_logger().debug(message, fields);
}

/// Log at info level through the default logger
pub fn info(message: &str, fields: &[Field]) {
    default_logger().info(message, fields);
}

/// Log at warn level through the default logger
pub fn warn(message: &str, fields: &[Field]) {
    default_logger().warn(message, fields);
}

/// Log at error level through the default logger
pub fn error(message: &str, fields: &[Field]) {
    default_logger().error(message, fields);
}

/// Log at fatal level through the default logger.
///
/// Runs the default logger's fatal effect, which exits the process unless
/// the slot holds a logger with a substituted handler.
pub fn fatal(message: &str, fields: &[Field]) {
    default_logger().fatal(message, fields);
}

/// Derive a logger from the default logger carrying the context's bindings
pub fn with_context(ctx: &Context) -> Box<dyn Logger> {
    default_logger().with_context(ctx)
}
