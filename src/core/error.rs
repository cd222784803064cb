//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors surfaced while constructing loggers.
///
/// Runtime write failures are deliberately absent: a broken sink drops
/// output silently instead of turning every log call into a fallible one.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with operation and path context
    #[error("IO error while {operation} '{path}': {source}")]
    Io {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an IO error with operation and path context
    pub fn io(
        operation: impl Into<String>,
        path: impl AsRef<std::path::Path>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::Io {
            operation: operation.into(),
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
