use crate::log_error::LogError;
use crate::log_level::LogLevel;
use crate::log_sink::LogSink;

/// Maximum number of registered sinks per [`crate::Logger`].
pub const MAX_SINKS: usize = 32;

/// One registered sink together with its minimum severity.
pub struct Registration {
    min_level: LogLevel,
    sink: Box<dyn LogSink>,
}

impl Registration {
    /// The minimum severity this sink accepts.
    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// The sink itself.
    pub fn sink_mut(&mut self) -> &mut dyn LogSink {
        &mut *self.sink
    }
}

/// Fixed-capacity, append-only collection of sink registrations.
///
/// Registration order is preserved and is also invocation order. There is no
/// unregister operation: a slot, once taken, stays taken for the life of the
/// registry. The capacity ceiling ([`MAX_SINKS`]) bounds memory; it is not a
/// leak.
pub struct SinkRegistry {
    entries: Vec<Registration>,
}

impl SinkRegistry {
    /// Creates an empty registry with capacity for [`MAX_SINKS`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_SINKS),
        }
    }

    /// Appends a sink at the next free slot.
    ///
    /// On success returns the slot index. The index is informational: no later
    /// operation takes it, since sinks are never removed.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::CapacityExceeded`] when all [`MAX_SINKS`] slots are
    /// taken; existing registrations are untouched.
    pub fn register(
        &mut self,
        sink: Box<dyn LogSink>,
        min_level: LogLevel,
    ) -> Result<usize, LogError> {
        if self.entries.len() >= MAX_SINKS {
            return Err(LogError::CapacityExceeded);
        }
        self.entries.push(Registration { min_level, sink });
        Ok(self.entries.len() - 1)
    }

    /// Number of taken slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no sink has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lazily iterates, in registration order, over the registrations whose
    /// minimum severity admits `level`.
    pub fn passing_mut(
        &mut self,
        level: LogLevel,
    ) -> impl Iterator<Item = &mut Registration> {
        self.entries
            .iter_mut()
            .filter(move |reg| reg.min_level <= level)
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
