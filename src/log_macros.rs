//! Leveled, formatting logging macros over a [`crate::Logger`].
//!
//! # Feature Flags
//! Individual levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`
//! (each implying the next). All are on by default, matching the facade's
//! default `Trace` threshold.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time. `fatal!` rides the
//! `log-error` gate: it is available whenever any logging is.

// ============================================================================
// 1. GENERIC INTERNAL MACRO (The "Worker")
// ============================================================================
// Available so the enabled macros below can use it. Call the level macros
// instead if you want feature-gating.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.emit($lvl, file!(), line!(), &__msg);
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! trace { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Trace, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! fatal { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Fatal, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(all(test, feature = "log-info"))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use crate::{LogEvent, LogLevel, Logger};
    use std::sync::{Arc, Mutex};

    #[test]
    fn macros_format_and_capture_the_call_site() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut logger = Logger::with_console(Box::new(std::io::sink()));
        logger.set_quiet(true);
        {
            let seen = seen.clone();
            logger
                .add_callback(
                    move |ev: &LogEvent<'_>| {
                        seen.lock()
                            .unwrap()
                            .push((ev.level, ev.file.to_string(), ev.message.to_string()));
                    },
                    LogLevel::Trace,
                )
                .unwrap();
        }

        crate::info!(logger, "listening on port {}", 9000);
        crate::warn!(logger, "{} retries left", 3);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, LogLevel::Info);
        assert_eq!(seen[0].1, file!());
        assert_eq!(seen[0].2, "listening on port 9000");
        assert_eq!(seen[1].0, LogLevel::Warn);
        assert_eq!(seen[1].2, "3 retries left");
    }
}
