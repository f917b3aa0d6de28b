use std::sync::{Condvar, Mutex};

/// Caller-supplied mutual exclusion bracketing one dispatch.
///
/// The facade performs no locking of its own; an embedding application that
/// logs from several threads installs a hook built on whatever primitive it
/// already uses. [`acquire`](Self::acquire) is called before any filtering or
/// rendering, [`release`](Self::release) after the last sink has run, even
/// when a sink panics.
///
/// Install the hook once during single-threaded setup, before concurrent
/// logging begins.
pub trait LockHook {
    fn acquire(&self);
    fn release(&self);
}

/// A ready-made [`LockHook`] built on [`std::sync::Mutex`] + [`Condvar`]
/// (a binary semaphore, since `acquire` and `release` happen in separate
/// trait calls rather than one guarded scope).
///
/// A poisoned mutex (a sink panicked inside an earlier dispatch) is treated
/// as still usable: the facade holds no invariants behind the lock.
#[derive(Default)]
pub struct MutexLockHook {
    locked: Mutex<bool>,
    cv: Condvar,
}

impl MutexLockHook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, bool> {
        match self.locked.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl LockHook for MutexLockHook {
    fn acquire(&self) {
        let mut held = self.state();
        while *held {
            held = match self.cv.wait(held) {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
        }
        *held = true;
    }

    fn release(&self) {
        *self.state() = false;
        self.cv.notify_one();
    }
}

/// RAII bracket for an optional [`LockHook`]: acquires on construction,
/// releases on drop. Every exit path of a dispatch (early return, renderer
/// error, panicking sink) releases the lock.
pub(crate) struct HookGuard<'a> {
    hook: Option<&'a dyn LockHook>,
}

impl<'a> HookGuard<'a> {
    pub(crate) fn enter(hook: Option<&'a dyn LockHook>) -> Self {
        if let Some(h) = hook {
            h.acquire();
        }
        Self { hook }
    }
}

impl Drop for HookGuard<'_> {
    fn drop(&mut self) {
        if let Some(h) = self.hook {
            h.release();
        }
    }
}
