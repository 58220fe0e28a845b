//! One-shot scheduled tasks with cooperative cancellation.
//!
//! Used for the post-verification redirect: the verify page schedules the
//! navigation and cancels the handle on teardown, so a dismissed screen never
//! navigates. The underlying browser timer still fires but checks the shared
//! cancelled flag first, making an orphaned timer side-effect free.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a pending [`schedule`] callback.
#[derive(Clone, Debug)]
pub struct ScheduledTask {
    cancelled: Arc<AtomicBool>,
}

impl ScheduledTask {
    /// Handle with nothing armed yet. Lets callers register teardown
    /// cancellation before the work that eventually calls [`arm`] starts;
    /// cancelling first suppresses a later `arm`.
    ///
    /// [`arm`]: Self::arm
    #[must_use]
    pub fn pending() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run `f` once after `delay_ms` milliseconds, unless the handle was (or
    /// gets) cancelled first. Outside the browser (`csr` off) the callback
    /// never runs.
    pub fn arm<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "csr")]
        {
            let flag = self.cancelled.clone();
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                if !flag.load(Ordering::SeqCst) {
                    f();
                }
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = delay_ms;
            drop(f);
        }
    }

    /// Prevent the callback from running. Idempotent; a no-op once the
    /// callback has already fired.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Arm a fresh handle in one step. See [`ScheduledTask::arm`].
pub fn schedule<F>(delay_ms: u32, f: F) -> ScheduledTask
where
    F: FnOnce() + 'static,
{
    let task = ScheduledTask::pending();
    task.arm(delay_ms, f);
    task
}
