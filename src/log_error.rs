use std::fmt;

/// Errors reported by the logging facade.
///
/// All variants are local, recoverable conditions returned to the immediate
/// caller; none is fatal to the process. Dispatch itself ([`crate::Logger::emit`])
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogError {
    /// The sink registry is full; the registration was not stored.
    CapacityExceeded,
    /// The caller-owned buffer is too small for the formatted message.
    BufferTooSmall,
    /// A raw level value outside the defined range.
    InvalidLevel(u8),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::CapacityExceeded => write!(f, "sink registry is at capacity"),
            LogError::BufferTooSmall => write!(f, "message does not fit in the provided buffer"),
            LogError::InvalidLevel(n) => write!(f, "invalid log level: {n}"),
        }
    }
}

impl std::error::Error for LogError {}
