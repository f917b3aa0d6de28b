use chrono::{DateTime, Local};

use crate::log_level::LogLevel;

/// Represents a single log call as seen by a sink.
///
/// This struct encapsulates the metadata associated with one log entry: its
/// severity, the source location of the call, the pre-formatted message text,
/// and the wall-clock timestamp of the dispatch.
///
/// A `LogEvent` is built fresh inside one dispatch and borrows the caller's
/// strings; it never outlives the call. The timestamp is captured at most once
/// per dispatch, so every sink invoked by the same log call observes the
/// identical instant.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    /// The severity level of the event.
    pub level: LogLevel,
    /// Source file of the log call, typically from `file!()` or `Location::caller()`.
    pub file: &'a str,
    /// Source line of the log call.
    pub line: u32,
    /// The pre-formatted message payload.
    pub message: &'a str,
    /// Wall-clock time of the dispatch, shared by all sinks in the dispatch.
    pub time: DateTime<Local>,
}
