//! # fieldlog
//!
//! A structured, leveled logging facility: human messages plus key-value
//! fields, filtered by severity, enriched with inherited and request-scoped
//! context, written to one or more destinations.
//!
//! ## Features
//!
//! - **Structured Fields**: Ordered key-value attributes on every entry
//! - **Field Inheritance**: Derive child loggers carrying extra fields
//! - **Context Bindings**: Request, user, and session ids flow from a
//!   [`Context`] into derived loggers
//! - **Fan-out**: Broadcast to several destinations, with the fatal effect
//!   running exactly once
//! - **Thread Safe**: One logger handle can be shared and called from many
//!   threads without interleaved lines
//!
//! ## Quick start
//!
//! ```
//! use fieldlog::prelude::*;
//!
//! let logger = StdLogger::default();
//! logger.info("server started", &[Field::new("port", 8080)]);
//!
//! let ctx = Context::new().with_request_id("req-123");
//! let scoped = logger.with_context(&ctx);
//! scoped.warn("slow query", &[Field::new("elapsed_ms", 412)]);
//! ```

pub mod core;
pub mod factory;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Config, Context, Field, FieldValue, Level, Logger, LoggerError, MultiLogger, Result,
        StdLogger, TimestampFormat,
    };
    pub use crate::factory::{LogWriter, LoggerFactory};
}

pub use crate::core::{
    Config, Context, FatalHandler, Field, FieldValue, Level, Logger, LoggerError, MultiLogger,
    Result, StdLogger, TimestampFormat,
};
pub use factory::{create_file_logger, LogWriter, LoggerFactory};
pub use global::{default_logger, set_default_logger, with_context};
