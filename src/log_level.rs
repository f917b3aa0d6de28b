use std::str::FromStr;

use crate::log_error::LogError;

/// Defines the severity levels for log messages.
///
/// Levels are totally ordered (`Trace < Debug < Info < Warn < Error < Fatal`);
/// comparison against a minimum level is the sole filtering mechanism used by
/// the dispatcher and by each registered sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Designates very fine-grained informational events.
    Trace = 0,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info,
    /// Designates potentially harmful situations.
    Warn,
    /// Designates error events that might still allow the application to continue running.
    Error,
    /// Designates very severe error events that will presumably lead the application to abort.
    Fatal,
}

/// Labels in level order, each used verbatim in rendered output.
const LEVEL_NAMES: [&str; 6] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

impl LogLevel {
    /// All levels in ascending severity order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Returns the canonical upper-case label for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LogError;

    /// Converts a raw numeric level into a `LogLevel`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidLevel`] if `value` is outside `0..=5`.
    fn try_from(value: u8) -> Result<Self, LogError> {
        match value {
            0 => Ok(LogLevel::Trace),
            1 => Ok(LogLevel::Debug),
            2 => Ok(LogLevel::Info),
            3 => Ok(LogLevel::Warn),
            4 => Ok(LogLevel::Error),
            5 => Ok(LogLevel::Fatal),
            n => Err(LogError::InvalidLevel(n)),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    /// Parses a level label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidLevel`] (with value `u8::MAX`) when `s` is
    /// not one of the six known labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|lvl| lvl.as_str().eq_ignore_ascii_case(s))
            .ok_or(LogError::InvalidLevel(u8::MAX))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
