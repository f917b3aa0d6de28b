//! Pure renderers mapping a [`LogEvent`] onto a byte stream.
//!
//! Each renderer writes exactly one line and flushes the target, so a crash
//! immediately after a log call cannot lose the line to OS buffering. The ANSI
//! escape sequences are fixed byte-for-byte; callers that need plain output
//! use [`plain`] or [`file`].

use std::io::{self, Write};

use crate::log_event::LogEvent;

/// ANSI color per level, in level order (trace..fatal).
const LEVEL_COLORS: [&str; 6] = [
    "\x1b[94m", "\x1b[36m", "\x1b[32m", "\x1b[33m", "\x1b[31m", "\x1b[35m",
];

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[90m";

/// Renders the color console form:
/// `HH:MM:SS <color>LEVEL<reset> <dim>file:line:<reset> message\n`.
///
/// # Errors
///
/// Propagates any I/O error from the target stream.
pub fn color(out: &mut dyn Write, ev: &LogEvent<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{} {}{:<5}{RESET} {DIM}{}:{}:{RESET} {}",
        ev.time.format("%H:%M:%S"),
        LEVEL_COLORS[ev.level as usize],
        ev.level.as_str(),
        ev.file,
        ev.line,
        ev.message,
    )?;
    out.flush()
}

/// Renders the plain console form: `HH:MM:SS LEVEL file:line: message\n`.
///
/// # Errors
///
/// Propagates any I/O error from the target stream.
pub fn plain(out: &mut dyn Write, ev: &LogEvent<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{} {:<5} {}:{}: {}",
        ev.time.format("%H:%M:%S"),
        ev.level.as_str(),
        ev.file,
        ev.line,
        ev.message,
    )?;
    out.flush()
}

/// Renders the file form: `YYYY-MM-DD HH:MM:SS LEVEL file:line: message\n`.
///
/// # Errors
///
/// Propagates any I/O error from the target stream.
pub fn file(out: &mut dyn Write, ev: &LogEvent<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{} {:<5} {}:{}: {}",
        ev.time.format("%Y-%m-%d %H:%M:%S"),
        ev.level.as_str(),
        ev.file,
        ev.line,
        ev.message,
    )?;
    out.flush()
}
