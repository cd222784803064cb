//! Logger construction helpers and the `io::Write` adapter

use crate::core::{Config, Level, Logger, LoggerError, MultiLogger, Result, StdLogger, TimestampFormat};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Builds loggers that share a timestamp format and line prefix.
///
/// # Examples
///
/// ```
/// use fieldlog::{Level, Logger, LoggerFactory};
///
/// let logger = LoggerFactory::new()
///     .with_prefix("api ")
///     .console(Level::Info);
/// logger.info("listening", &[]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggerFactory {
    time_format: TimestampFormat,
    prefix: String,
}

impl LoggerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format applied to every logger built by this factory
    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Set the prefix prepended to every line
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Logger writing to standard output
    pub fn console(&self, level: Level) -> StdLogger {
        StdLogger::new(Config {
            level,
            output: None,
            time_format: self.time_format.clone(),
            prefix: self.prefix.clone(),
        })
    }

    /// Logger appending to the file at `path`, creating missing directories
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fieldlog::{Level, LoggerFactory};
    ///
    /// let logger = LoggerFactory::new()
    ///     .file("/var/log/app.log", Level::Debug)
    ///     .expect("log file should be writable");
    /// ```
    pub fn file(&self, path: impl AsRef<Path>, level: Level) -> Result<StdLogger> {
        let file = open_log_file(path.as_ref())?;
        Ok(StdLogger::new(Config {
            level,
            output: Some(Box::new(file)),
            time_format: self.time_format.clone(),
            prefix: self.prefix.clone(),
        }))
    }

    /// Logger built from an explicit configuration, taken as-is
    pub fn custom(&self, config: Config) -> StdLogger {
        StdLogger::new(config)
    }

    /// Fan-out logger over standard output and a file, each with its own
    /// threshold. The file member is last, so on a fatal entry it is the one
    /// that receives the fatal-level call.
    pub fn combined(
        &self,
        path: impl AsRef<Path>,
        console_level: Level,
        file_level: Level,
    ) -> Result<MultiLogger> {
        let console = self.console(console_level);
        let file = self.file(path, file_level)?;
        Ok(MultiLogger::new(vec![Box::new(console), Box::new(file)]))
    }

    /// Adapter feeding an `io::Write` byte stream into `logger` at `level`
    pub fn writer(&self, logger: Box<dyn Logger>, level: Level) -> LogWriter {
        LogWriter::new(logger, level)
    }
}

/// Open a file logger with the default timestamp format and no prefix.
pub fn create_file_logger(path: impl AsRef<Path>, level: Level) -> Result<StdLogger> {
    LoggerFactory::new().file(path, level)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .map_err(|source| LoggerError::io("creating log directory", dir, source))?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::io("opening log file", path, source))
}

/// Routes a byte stream into a logger, one log entry per `write` call.
///
/// One trailing line terminator is stripped before forwarding, since the
/// logger terminates lines itself. Every call reports the full buffer as
/// consumed, so callers such as `writeln!` never see a short write.
pub struct LogWriter {
    logger: Box<dyn Logger>,
    level: Level,
}

impl LogWriter {
    pub fn new(logger: Box<dyn Logger>, level: Level) -> Self {
        Self { logger, level }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let message = text
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(&text);
        self.logger.log(self.level, message, &[]);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
