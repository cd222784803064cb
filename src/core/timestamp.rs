//! Timestamp formatting utilities
//!
//! Provides standardized, configurable timestamp formats for log output.
//! Supports RFC 3339, ISO 8601, Unix timestamps, and custom formats.

use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use fieldlog::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Rfc3339;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.contains('T'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with offset, seconds precision: `2025-01-08T10:30:45Z`
    ///
    /// This is the default format.
    #[default]
    Rfc3339,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+00:00`
    ///
    /// Provides higher precision for ordering concurrent log entries.
    Iso8601,

    /// Unix timestamp in seconds: `1736332245`
    ///
    /// Compact format, useful for systems that expect numeric timestamps.
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldlog::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    ///
    /// // Simple date only
    /// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime` in any time zone according to this format.
    ///
    /// Never fails: a custom pattern chrono cannot render falls back to
    /// the RFC 3339 default instead of panicking.
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                // chrono reports a bad pattern only while the formatter is
                // driven, so render into a buffer instead of to_string()
                let mut out = String::new();
                match write!(out, "{}", datetime.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
                }
            }
        }
    }
}
