#![forbid(unsafe_code)]

//! Pacing and cancellation for run workers.
//!
//! Every step of a run passes through [`Pacer::pause`], which reads the
//! shared [`SpeedHandle`] fresh and performs an interruptible wait. The
//! controller side holds the paired [`CancelHandle`]; cancelling wakes any
//! wait in progress immediately, so a reset never has to sit out a long
//! pacing delay.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use stepsort_core::Interrupted;

/// Shared, live-adjustable pacing delay.
///
/// One handle lives in the engine for its whole lifetime. Runs read it fresh
/// at every suspension, so an adjustment lands on the very next step of an
/// in-flight run, never batched or smoothed.
#[derive(Clone)]
pub struct SpeedHandle {
    nanos: Arc<AtomicU64>,
}

impl SpeedHandle {
    /// New handle holding `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            nanos: Arc::new(AtomicU64::new(to_nanos(delay))),
        }
    }

    /// Replace the delay. `Duration::ZERO` means unpaced.
    pub fn set(&self, delay: Duration) {
        self.nanos.store(to_nanos(delay), Ordering::Relaxed);
    }

    /// Current delay.
    #[must_use]
    pub fn get(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}

fn to_nanos(delay: Duration) -> u64 {
    u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX)
}

/// Worker-side suspension point for one run.
///
/// Created per run; the paired [`CancelHandle`] stays with the controller.
/// Cancellation is level-triggered: once fired, every later `pause` returns
/// `Err(Interrupted)` without waiting.
pub struct Pacer {
    speed: SpeedHandle,
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Pacer {
    /// Create a pacer reading `speed`, plus the handle that cancels it.
    pub(crate) fn new(speed: SpeedHandle) -> (Self, CancelHandle) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let pacer = Self {
            speed,
            inner: inner.clone(),
        };
        (pacer, CancelHandle { inner })
    }

    /// Check whether the paired handle has fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Suspend for the current delay, or return early when cancelled.
    ///
    /// A zero delay skips the wait but still observes cancellation, so
    /// unpaced runs remain interruptible at every step.
    pub fn pause(&self) -> Result<(), Interrupted> {
        let delay = self.speed.get();
        if delay.is_zero() {
            if self.is_cancelled() {
                return Err(Interrupted);
            }
            return Ok(());
        }
        if self.wait_cancelled(delay) {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }

    /// Wait for either cancellation or a timeout.
    ///
    /// Returns `true` if cancelled, `false` if timed out. Blocks efficiently
    /// on a condition variable and loops to absorb spurious wakeups.
    fn wait_cancelled(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut cancelled = lock.lock().unwrap();
        if *cancelled {
            return true;
        }

        let start = std::time::Instant::now();
        let mut remaining = duration;

        loop {
            let (guard, result) = cvar.wait_timeout(cancelled, remaining).unwrap();
            cancelled = guard;
            if *cancelled {
                return true;
            }
            if result.timed_out() {
                return false;
            }
            // Check if we really timed out (spurious wakeup protection).
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            remaining = duration - elapsed;
        }
    }
}

/// Controller-side trigger that cancels the paired [`Pacer`].
pub(crate) struct CancelHandle {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelHandle {
    /// Fire the cancellation, waking any wait in progress.
    pub(crate) fn cancel(&self) {
        let (lock, cvar) = &*self.inner;
        let mut cancelled = lock.lock().unwrap();
        *cancelled = true;
        cvar.notify_all();
    }
}
