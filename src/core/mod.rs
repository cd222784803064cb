//! Core logger types and traits

pub mod context;
pub mod error;
pub mod field;
pub mod level;
pub mod logger;
pub mod multi;
pub mod timestamp;

pub use context::Context;
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use level::Level;
pub use logger::{Config, FatalHandler, Logger, StdLogger};
pub use multi::MultiLogger;
pub use timestamp::TimestampFormat;
