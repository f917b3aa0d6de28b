use std::io::{self, Write};
use std::panic::Location;

use chrono::{DateTime, Local};

use crate::lock_hook::{HookGuard, LockHook};
use crate::log_error::LogError;
use crate::log_event::LogEvent;
use crate::log_level::LogLevel;
use crate::log_sink::{FnSink, LogSink, WriterSink};
use crate::render;
use crate::sink_registry::SinkRegistry;

/// Process-wide logging state and dispatch orchestrator.
///
/// Holds the global severity threshold, the quiet flag, the optional
/// [`LockHook`], and the sink registry. Construct one `Logger` at process
/// startup, configure it while still single-threaded, then share it (behind
/// the caller's own synchronization) for the life of the process; there is no
/// teardown.
///
/// Two filtering regimes coexist:
///
/// * the implicit console sink (stderr by default) is gated by the global
///   threshold *and* the quiet flag;
/// * every registered sink is gated only by its own minimum severity.
///
/// # Dispatch order
///
/// Within one [`emit`](Self::emit), the console fires first (when it passes),
/// then registered sinks in registration order. All of them observe the same
/// timestamp, captured at most once per dispatch; a fully filtered call
/// never reads the clock.
pub struct Logger {
    level: LogLevel,
    quiet: bool,
    lock: Option<Box<dyn LockHook>>,
    sinks: SinkRegistry,
    console: Box<dyn Write + Send>,
}

impl Logger {
    /// Creates a logger with the default configuration: threshold
    /// [`LogLevel::Trace`], not quiet, no lock hook, no registered sinks,
    /// console on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(Box::new(io::stderr()))
    }

    /// Creates a logger whose implicit console sink writes to `console`
    /// instead of stderr.
    #[must_use]
    pub fn with_console(console: Box<dyn Write + Send>) -> Self {
        Self {
            level: LogLevel::Trace,
            quiet: false,
            lock: None,
            sinks: SinkRegistry::new(),
            console,
        }
    }

    /// Sets the global severity threshold. Affects only the implicit console
    /// sink; registered sinks keep their own thresholds.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Current global severity threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Suppresses (or restores) the implicit console sink. Registered sinks
    /// are unaffected.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    /// Installs or replaces the lock hook bracketing each dispatch, or
    /// removes it with `None`. Not itself synchronized: call during
    /// single-threaded setup, before concurrent logging begins.
    pub fn set_lock(&mut self, hook: Option<Box<dyn LockHook>>) {
        self.lock = hook;
    }

    /// Registers a sink with its minimum severity.
    ///
    /// Sinks are invoked in registration order and can never be removed.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::CapacityExceeded`] when the registry is full
    /// ([`crate::MAX_SINKS`] sinks); the registry is left unchanged.
    pub fn add_sink(
        &mut self,
        sink: impl LogSink + 'static,
        min_level: LogLevel,
    ) -> Result<usize, LogError> {
        self.sinks.register(Box::new(sink), min_level)
    }

    /// Registers a callback closure as a sink; whatever the closure captures
    /// plays the role of its user data.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::CapacityExceeded`] when the registry is full.
    pub fn add_callback(
        &mut self,
        callback: impl FnMut(&LogEvent<'_>) + 'static,
        min_level: LogLevel,
    ) -> Result<usize, LogError> {
        self.sinks.register(Box::new(FnSink::new(callback)), min_level)
    }

    /// Registers a caller-opened writable stream as a sink rendering the
    /// file form (`YYYY-MM-DD HH:MM:SS LEVEL file:line: message`).
    ///
    /// # Errors
    ///
    /// Returns [`LogError::CapacityExceeded`] when the registry is full.
    pub fn add_writer(
        &mut self,
        writer: impl Write + 'static,
        min_level: LogLevel,
    ) -> Result<usize, LogError> {
        self.sinks.register(Box::new(WriterSink::new(writer)), min_level)
    }

    /// Dispatches one log call to every applicable sink.
    ///
    /// Never fails: a call that passes no filter performs no visible work (and
    /// does not read the clock). Sink failures are the sink's own contract:
    /// the dispatcher catches nothing, so a panicking sink unwinds out of
    /// `emit`, skipping later sinks in that dispatch; the lock hook is still
    /// released.
    pub fn emit(&mut self, level: LogLevel, file: &str, line: u32, message: &str) {
        let Self {
            level: threshold,
            quiet,
            lock,
            sinks,
            console,
        } = self;

        let _guard = HookGuard::enter(lock.as_deref());

        // Resolved on first need, then shared by everything in this dispatch.
        let mut time: Option<DateTime<Local>> = None;

        if !*quiet && level >= *threshold {
            let ev = LogEvent {
                level,
                file,
                line,
                message,
                time: *time.get_or_insert_with(Local::now),
            };
            let _ = render::color(&mut **console, &ev);
        }

        for reg in sinks.passing_mut(level) {
            let ev = LogEvent {
                level,
                file,
                line,
                message,
                time: *time.get_or_insert_with(Local::now),
            };
            reg.sink_mut().write(&ev);
        }
    }

    /// Logs at [`LogLevel::Trace`] from the caller's location.
    #[track_caller]
    pub fn trace(&mut self, message: &str) {
        let loc = Location::caller();
        self.emit(LogLevel::Trace, loc.file(), loc.line(), message);
    }

    /// Logs at [`LogLevel::Debug`] from the caller's location.
    #[track_caller]
    pub fn debug(&mut self, message: &str) {
        let loc = Location::caller();
        self.emit(LogLevel::Debug, loc.file(), loc.line(), message);
    }

    /// Logs at [`LogLevel::Info`] from the caller's location.
    #[track_caller]
    pub fn info(&mut self, message: &str) {
        let loc = Location::caller();
        self.emit(LogLevel::Info, loc.file(), loc.line(), message);
    }

    /// Logs at [`LogLevel::Warn`] from the caller's location.
    #[track_caller]
    pub fn warn(&mut self, message: &str) {
        let loc = Location::caller();
        self.emit(LogLevel::Warn, loc.file(), loc.line(), message);
    }

    /// Logs at [`LogLevel::Error`] from the caller's location.
    #[track_caller]
    pub fn error(&mut self, message: &str) {
        let loc = Location::caller();
        self.emit(LogLevel::Error, loc.file(), loc.line(), message);
    }

    /// Logs at [`LogLevel::Fatal`] from the caller's location.
    #[track_caller]
    pub fn fatal(&mut self, message: &str) {
        let loc = Location::caller();
        self.emit(LogLevel::Fatal, loc.file(), loc.line(), message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Cloneable capture target standing in for a console or file stream.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn quiet_logger() -> Logger {
        let mut logger = Logger::with_console(Box::new(io::sink()));
        logger.set_quiet(true);
        logger
    }

    #[test]
    fn default_threshold_is_trace() {
        let logger = Logger::with_console(Box::new(io::sink()));
        assert_eq!(logger.level(), LogLevel::Trace);
    }

    #[test]
    fn console_respects_global_level() {
        let console = SharedBuf::default();
        let mut logger = Logger::with_console(Box::new(console.clone()));
        logger.set_level(LogLevel::Warn);

        logger.emit(LogLevel::Info, "a.rs", 1, "dropped");
        assert_eq!(console.contents(), "");

        logger.emit(LogLevel::Error, "a.rs", 2, "kept");
        let line = console.contents();
        assert!(line.contains("ERROR"), "line: {line:?}");
        assert!(line.contains("a.rs:2:"), "line: {line:?}");
        assert!(line.ends_with("kept\n"), "line: {line:?}");
    }

    #[test]
    fn quiet_suppresses_only_the_console() {
        let console = SharedBuf::default();
        let file = SharedBuf::default();
        let mut logger = Logger::with_console(Box::new(console.clone()));
        logger.add_writer(file.clone(), LogLevel::Trace).unwrap();

        logger.set_quiet(true);
        logger.emit(LogLevel::Info, "a.rs", 1, "hidden from console");
        assert_eq!(console.contents(), "");
        assert!(file.contents().ends_with("hidden from console\n"));

        logger.set_quiet(false);
        logger.emit(LogLevel::Info, "a.rs", 2, "back");
        assert!(console.contents().ends_with("back\n"));
    }

    #[test]
    fn registered_sinks_ignore_global_level_and_quiet() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut logger = quiet_logger();
        logger.set_level(LogLevel::Fatal);
        {
            let seen = seen.clone();
            logger
                .add_callback(
                    move |ev: &LogEvent<'_>| seen.lock().unwrap().push(ev.message.to_string()),
                    LogLevel::Debug,
                )
                .unwrap();
        }

        logger.emit(LogLevel::Trace, "a.rs", 1, "below sink threshold");
        logger.emit(LogLevel::Debug, "a.rs", 2, "at sink threshold");
        logger.emit(LogLevel::Info, "a.rs", 3, "above sink threshold");

        assert_eq!(
            *seen.lock().unwrap(),
            ["at sink threshold", "above sink threshold"]
        );
    }

    #[test]
    fn sinks_fire_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut logger = quiet_logger();
        for id in ["A", "B", "C"] {
            let order = order.clone();
            logger
                .add_callback(
                    move |_ev: &LogEvent<'_>| order.lock().unwrap().push(id),
                    LogLevel::Trace,
                )
                .unwrap();
        }
        logger.emit(LogLevel::Info, "a.rs", 1, "once");
        assert_eq!(*order.lock().unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn one_dispatch_one_timestamp() {
        let times = Arc::new(Mutex::new(Vec::new()));
        let console = SharedBuf::default();
        let mut logger = Logger::with_console(Box::new(console.clone()));
        for _ in 0..3 {
            let times = times.clone();
            logger
                .add_callback(
                    move |ev: &LogEvent<'_>| times.lock().unwrap().push(ev.time),
                    LogLevel::Trace,
                )
                .unwrap();
        }

        logger.emit(LogLevel::Info, "a.rs", 1, "tick");

        let times = times.lock().unwrap();
        assert_eq!(times.len(), 3);
        assert!(times.windows(2).all(|w| w[0] == w[1]));

        // The console line was rendered from the same memoized instant.
        let console_hms = console.contents()[..8].to_string();
        assert_eq!(console_hms, times[0].format("%H:%M:%S").to_string());
    }

    #[test]
    fn filtered_call_does_not_touch_sinks() {
        let mut logger = quiet_logger();
        let hits = Arc::new(Mutex::new(0u32));
        {
            let hits = hits.clone();
            logger
                .add_callback(
                    move |_ev: &LogEvent<'_>| *hits.lock().unwrap() += 1,
                    LogLevel::Error,
                )
                .unwrap();
        }
        logger.emit(LogLevel::Warn, "a.rs", 1, "filtered");
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[test]
    fn lock_hook_brackets_every_dispatch() {
        use crate::lock_hook::LockHook;
        use std::sync::atomic::{AtomicU32, Ordering};

        #[derive(Default)]
        struct Tally {
            acquired: AtomicU32,
            released: AtomicU32,
        }
        struct TallyHook(Arc<Tally>);
        impl LockHook for TallyHook {
            fn acquire(&self) {
                self.0.acquired.fetch_add(1, Ordering::SeqCst);
            }
            fn release(&self) {
                self.0.released.fetch_add(1, Ordering::SeqCst);
            }
        }

        let tally = Arc::new(Tally::default());
        let mut logger = quiet_logger();
        logger.set_lock(Some(Box::new(TallyHook(tally.clone()))));

        logger.emit(LogLevel::Info, "a.rs", 1, "one");
        logger.emit(LogLevel::Trace, "a.rs", 2, "fully filtered, still bracketed");

        assert_eq!(tally.acquired.load(Ordering::SeqCst), 2);
        assert_eq!(tally.released.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn wrappers_capture_the_callers_location() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut logger = quiet_logger();
        {
            let seen = seen.clone();
            logger
                .add_callback(
                    move |ev: &LogEvent<'_>| {
                        seen.lock().unwrap().push((ev.level, ev.file.to_string(), ev.line));
                    },
                    LogLevel::Trace,
                )
                .unwrap();
        }

        logger.info("here");
        let line_of_call = line!() - 1;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, LogLevel::Info);
        assert_eq!(seen[0].1, file!());
        assert_eq!(seen[0].2, line_of_call);
    }
}
