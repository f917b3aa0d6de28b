use std::io::Write;

use crate::log_event::LogEvent;
use crate::render;

/// A destination for log events.
///
/// A sink owns whatever state it writes to (a stream, a buffer, a counter);
/// the dispatcher hands it each passing event in registration order. Sinks are
/// invoked synchronously, in-line with the log call, and decide their own
/// failure policy: the dispatcher neither catches nor suppresses anything a
/// sink does.
pub trait LogSink {
    fn write(&mut self, ev: &LogEvent<'_>);
}

/// Adapts an `FnMut(&LogEvent)` closure into a sink; captured state plays the
/// role of the sink's user data.
pub struct FnSink<F> {
    f: F,
}

impl<F: FnMut(&LogEvent<'_>)> FnSink<F> {
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(&LogEvent<'_>)> LogSink for FnSink<F> {
    #[inline]
    fn write(&mut self, ev: &LogEvent<'_>) {
        (self.f)(ev);
    }
}

/// A sink that renders the file form (`YYYY-MM-DD HH:MM:SS LEVEL file:line:
/// message`) onto a caller-opened writable stream.
///
/// I/O errors are swallowed: a log line that cannot be written is dropped
/// rather than failing the dispatch.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a caller-opened writable stream.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink and returns the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn write(&mut self, ev: &LogEvent<'_>) {
        let _ = render::file(&mut self.out, ev);
    }
}

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn write(&mut self, _ev: &LogEvent<'_>) {}
}
