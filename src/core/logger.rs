//! Main logger implementation

use super::{context::Context, field::Field, level::Level, timestamp::TimestampFormat};
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::process;
use std::sync::Arc;

/// Effect run after a fatal entry has been written.
///
/// The default handler exits the process with status 1. Tests and embedders
/// that must intercept termination substitute their own through
/// [`StdLogger::with_fatal_handler`].
pub type FatalHandler = Arc<dyn Fn() + Send + Sync>;

/// Configuration for constructing a [`StdLogger`]
pub struct Config {
    /// Minimum level an entry must reach to be written
    pub level: Level,
    /// Output sink; `None` selects standard out
    pub output: Option<Box<dyn Write + Send>>,
    /// Timestamp rendering used at the start of each line
    pub time_format: TimestampFormat,
    /// Verbatim prefix written before the timestamp
    pub prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            output: None,
            time_format: TimestampFormat::Rfc3339,
            prefix: String::new(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("level", &self.level)
            .field("output", &self.output.as_ref().map(|_| "<sink>"))
            .field("time_format", &self.time_format)
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Capability interface shared by single-sink and fan-out loggers.
///
/// `log` carries the full contract: threshold filtering, field merging,
/// formatting, the single write, and the fatal effect. The leveled helpers
/// delegate to it. `with` and `with_context` derive child loggers whose
/// entries carry additional fields; derivation never mutates the receiver.
pub trait Logger: Send + Sync {
    /// Write one entry at `level` if it passes the threshold
    fn log(&self, level: Level, message: &str, fields: &[Field]);

    /// Derive a logger whose entries carry `fields` after the inherited ones
    fn with(&self, fields: &[Field]) -> Box<dyn Logger>;

    /// Derive a logger carrying the context's bound identifiers as fields,
    /// in the order request id, user id, session id
    fn with_context(&self, ctx: &Context) -> Box<dyn Logger>;

    fn debug(&self, message: &str, fields: &[Field]) {
        self.log(Level::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[Field]) {
        self.log(Level::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[Field]) {
        self.log(Level::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[Field]) {
        self.log(Level::Error, message, fields);
    }

    /// Write the entry, then run the fatal effect (process exit by default)
    fn fatal(&self, message: &str, fields: &[Field]) {
        self.log(Level::Fatal, message, fields);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, message: &str, fields: &[Field]) {
        (**self).log(level, message, fields);
    }

    fn with(&self, fields: &[Field]) -> Box<dyn Logger> {
        (**self).with(fields)
    }

    fn with_context(&self, ctx: &Context) -> Box<dyn Logger> {
        (**self).with_context(ctx)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, message: &str, fields: &[Field]) {
        (**self).log(level, message, fields);
    }

    fn with(&self, fields: &[Field]) -> Box<dyn Logger> {
        (**self).with(fields)
    }

    fn with_context(&self, ctx: &Context) -> Box<dyn Logger> {
        (**self).with_context(ctx)
    }
}

/// Standard logger writing formatted lines to a shared sink.
///
/// Lines follow `<prefix><timestamp> [<LEVEL>] <message> {k1=v1 k2=v2}`,
/// with the field suffix absent when the merged field list is empty.
/// Derived loggers share the sink and its write lock, so all loggers in one
/// family serialize their writes against each other, but each holds an
/// independent copy of the inherited field list.
///
/// # Examples
///
/// ```
/// use fieldlog::prelude::*;
///
/// let logger = StdLogger::default();
/// logger.info("server started", &[Field::new("port", 8080)]);
///
/// let request = logger.with(&[Field::new("request_id", "req-42")]);
/// request.warn("slow query", &[Field::new("elapsed_ms", 412)]);
/// ```
#[derive(Clone)]
pub struct StdLogger {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
    threshold: Level,
    time_format: TimestampFormat,
    prefix: String,
    fields: Vec<Field>,
    on_fatal: FatalHandler,
}

impl fmt::Debug for StdLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdLogger")
            .field("sink", &"<sink>")
            .field("threshold", &self.threshold)
            .field("time_format", &self.time_format)
            .field("prefix", &self.prefix)
            .field("fields", &self.fields)
            .finish()
    }
}

impl StdLogger {
    /// Build a logger from `config`.
    ///
    /// A missing output falls back to standard out and an empty custom
    /// time format falls back to RFC 3339.
    pub fn new(config: Config) -> Self {
        let sink: Box<dyn Write + Send> = match config.output {
            Some(sink) => sink,
            None => Box::new(io::stdout()),
        };
        let time_format = match config.time_format {
            TimestampFormat::Custom(pattern) if pattern.is_empty() => TimestampFormat::Rfc3339,
            other => other,
        };

        Self {
            sink: Arc::new(Mutex::new(sink)),
            threshold: config.level,
            time_format,
            prefix: config.prefix,
            fields: Vec::new(),
            on_fatal: Arc::new(|| process::exit(1)),
        }
    }

    /// Replace the effect run after a fatal entry is written.
    ///
    /// The handler is inherited by loggers derived from this one.
    #[must_use]
    pub fn with_fatal_handler(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_fatal = Arc::new(handler);
        self
    }

    /// The threshold entries must reach to be written
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Format and write one line while holding the sink lock.
    ///
    /// Inherited fields render before call-site fields. Write errors are
    /// swallowed: logging runs on best effort and must never panic.
    fn write_entry(&self, level: Level, message: &str, fields: &[Field]) {
        let mut sink = self.sink.lock();

        let mut line = String::with_capacity(48 + self.prefix.len() + message.len());
        line.push_str(&self.prefix);
        line.push_str(&self.time_format.format(&Local::now()));
        line.push_str(" [");
        line.push_str(level.to_str());
        line.push_str("] ");
        line.push_str(&sanitize_message(message));
        if !(self.fields.is_empty() && fields.is_empty()) {
            line.push_str(" {");
            for (i, field) in self.fields.iter().chain(fields).enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(&field.to_string());
            }
            line.push('}');
        }
        line.push('\n');

        let _ = sink.write_all(line.as_bytes());
    }
}

impl Default for StdLogger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Logger for StdLogger {
    fn log(&self, level: Level, message: &str, fields: &[Field]) {
        if level < self.threshold {
            return;
        }

        self.write_entry(level, message, fields);

        if level == Level::Fatal {
            // The sink guard is released by now; a handler that logs
            // through a sibling cannot deadlock on the write lock.
            (self.on_fatal)();
        }
    }

    fn with(&self, fields: &[Field]) -> Box<dyn Logger> {
        let mut merged = Vec::with_capacity(self.fields.len() + fields.len());
        merged.extend_from_slice(&self.fields);
        merged.extend_from_slice(fields);

        Box::new(StdLogger {
            sink: Arc::clone(&self.sink),
            threshold: self.threshold,
            time_format: self.time_format.clone(),
            prefix: self.prefix.clone(),
            fields: merged,
            on_fatal: Arc::clone(&self.on_fatal),
        })
    }

    fn with_context(&self, ctx: &Context) -> Box<dyn Logger> {
        let mut fields = Vec::new();
        if let Some(id) = ctx.request_id() {
            fields.push(Field::new("request_id", id));
        }
        if let Some(id) = ctx.user_id() {
            fields.push(Field::new("user_id", id));
        }
        if let Some(id) = ctx.session_id() {
            fields.push(Field::new("session_id", id));
        }
        self.with(&fields)
    }
}

/// Replace line breaks and tabs with escape sequences so one call always
/// produces exactly one line, keeping injected text from forging entries.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
