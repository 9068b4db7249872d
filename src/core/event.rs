//! Two-state signaling primitive

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// A flag that threads can wait on
///
/// A manual-reset event stays signaled until [`reset`](Event::reset) and
/// releases every waiter. An auto-reset event is cleared by the waiter that
/// observes it, so each signal releases one wait.
///
/// # Example
///
/// ```
/// use variadic_logger::core::Event;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let event = Arc::new(Event::auto_reset());
/// let signaler = Arc::clone(&event);
/// std::thread::spawn(move || signaler.signal());
///
/// assert!(event.wait_timeout(Duration::from_secs(5)));
/// assert!(!event.is_signaled());
/// ```
#[derive(Debug)]
pub struct Event {
    signaled: Mutex<bool>,
    cond: Condvar,
    auto_reset: bool,
}

impl Event {
    /// A manual-reset event, initially clear
    pub fn new() -> Self {
        Self {
            signaled: Mutex::new(false),
            cond: Condvar::new(),
            auto_reset: false,
        }
    }

    /// An auto-reset event, initially clear
    pub fn auto_reset() -> Self {
        Self {
            signaled: Mutex::new(false),
            cond: Condvar::new(),
            auto_reset: true,
        }
    }

    pub fn is_auto_reset(&self) -> bool {
        self.auto_reset
    }

    pub fn signal(&self) {
        let mut signaled = self.signaled.lock();
        *signaled = true;
        if self.auto_reset {
            self.cond.notify_one();
        } else {
            self.cond.notify_all();
        }
    }

    pub fn reset(&self) {
        *self.signaled.lock() = false;
    }

    pub fn is_signaled(&self) -> bool {
        *self.signaled.lock()
    }

    /// Block until signaled
    pub fn wait(&self) {
        let mut signaled = self.signaled.lock();
        while !*signaled {
            self.cond.wait(&mut signaled);
        }
        if self.auto_reset {
            *signaled = false;
        }
    }

    /// Block until signaled or `timeout` elapses; true if signaled
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut signaled = self.signaled.lock();
        while !*signaled {
            if self.cond.wait_until(&mut signaled, deadline).timed_out() {
                break;
            }
        }

        let was_signaled = *signaled;
        if was_signaled && self.auto_reset {
            *signaled = false;
        }
        was_signaled
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}
