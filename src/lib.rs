//! fanlog is a minimal leveled logging facade.
//!
//! An application calls level-tagged log statements; the facade attaches
//! metadata (timestamp, source location, severity) and fans the event out to
//! zero or more registered sinks, each independently filtered by a minimum
//! severity. An implicit console sink (stderr, color) is gated separately by
//! the global threshold and the quiet flag.
//!
//! The crate is structured into small modules, each responsible for one
//! concern of the dispatch path.
//!
//! # Example
//!
//! ```no_run
//! use fanlog::{LogLevel, Logger};
//!
//! let mut logger = Logger::new();
//! logger.set_level(LogLevel::Info);
//!
//! let file = std::fs::File::create("app.log").expect("create log file");
//! logger.add_writer(file, LogLevel::Debug).expect("registry has room");
//!
//! fanlog::info!(logger, "listening on port {}", 9000);
//! logger.warn("low disk space");
//! ```

/// Bounded formatting into a caller-owned buffer.
pub mod format_buf;
/// Caller-supplied mutual exclusion around a dispatch.
pub mod lock_hook;
/// Error taxonomy of the facade.
pub mod log_error;
/// The per-dispatch event record handed to sinks.
pub mod log_event;
/// Ordered severity levels.
pub mod log_level;
/// Leveled, feature-gated logging macros.
pub mod log_macros;
/// The sink trait and bundled sink implementations.
pub mod log_sink;
/// Logger state and the fan-out dispatcher.
pub mod logger;
/// Pure text renderers for console and file output.
pub mod render;
/// Fixed-capacity sink registry.
pub mod sink_registry;

pub use format_buf::format_into;
pub use lock_hook::{LockHook, MutexLockHook};
pub use log_error::LogError;
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use log_sink::{FnSink, LogSink, NoopLogSink, WriterSink};
pub use logger::Logger;
pub use sink_registry::{Registration, SinkRegistry, MAX_SINKS};
