//! Background writer and named logger registry
//!
//! A [`LogManager`] owns one writer thread. Loggers attached to it render
//! their lines on the calling thread and only enqueue them; the writer
//! drains the queue in FIFO order and performs all sink I/O. At most one
//! manager is live per process.

use super::delivery::PendingDelivery;
use super::error::{LoggerError, Result};
use super::event::Event;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::metrics::LoggerMetrics;
use parking_lot::{Condvar, Mutex};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default interval at which an idle writer re-checks its queue
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

static ACTIVE_MANAGER: Mutex<Option<Weak<ManagerShared>>> = parking_lot::const_mutex(None);

#[cfg(test)]
pub(crate) static TEST_MANAGER_LOCK: Mutex<()> = parking_lot::const_mutex(());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    pub poll_interval: Duration,
}

impl ManagerConfig {
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

struct Queue {
    pending: VecDeque<PendingDelivery>,
    /// Cleared when shutdown begins; lines are still accepted until `closed`
    running: bool,
    /// Set by the writer once it has drained everything and exited
    closed: bool,
}

pub(crate) struct ManagerShared {
    queue: Mutex<Queue>,
    event: Event,
    /// Notified under `queue` after every delivered batch
    drained: Condvar,
    registry: Mutex<HashMap<String, Logger>>,
    metrics: LoggerMetrics,
    poll_interval: Duration,
}

impl ManagerShared {
    /// Queue `pending` for the writer, or hand it back once the writer exited
    ///
    /// Lines are accepted during shutdown so that a thread's later lines
    /// never overtake its earlier ones still waiting in the queue.
    pub(crate) fn enqueue(&self, pending: PendingDelivery) -> std::result::Result<(), PendingDelivery> {
        {
            let mut queue = self.queue.lock();
            if queue.closed {
                return Err(pending);
            }
            queue.pending.push_back(pending);
            self.metrics.record_enqueued();
        }
        self.event.signal();
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.queue.lock().running
    }

    fn get_logger(self: &Arc<Self>, name: &str) -> Logger {
        let mut registry = self.registry.lock();
        registry
            .entry(name.to_string())
            .or_insert_with(|| {
                let logger = Logger::console(name, LogLevel::Debug);
                logger.attach(Arc::downgrade(self));
                logger
            })
            .clone()
    }

    fn set_logger(self: &Arc<Self>, logger: &Logger) {
        logger.attach(Arc::downgrade(self));
        let previous = self
            .registry
            .lock()
            .insert(logger.name().to_string(), logger.clone());

        if let Some(previous) = previous {
            if !previous.ptr_eq(logger) {
                previous.detach();
            }
        }
    }
}

/// Handle owning the background writer thread
///
/// Dropping the manager tells the writer to finish: it keeps draining until
/// it sees the queue empty after shutdown began, then exits and is joined.
/// Loggers that outlive the writer fall back to writing on the calling
/// thread.
///
/// # Example
///
/// ```
/// use variadic_logger::core::LogManager;
///
/// let manager = LogManager::new().unwrap();
/// let logger = manager.get_logger("jobs");
/// let _ = logger.info() << "queued on" << "log-writer";
/// drop(manager); // drains the queue
/// ```
pub struct LogManager {
    shared: Arc<ManagerShared>,
    writer: Option<JoinHandle<()>>,
}

impl LogManager {
    pub fn new() -> Result<Self> {
        Self::with_config(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Result<Self> {
        let mut slot = ACTIVE_MANAGER.lock();
        if slot.as_ref().is_some_and(|live| live.strong_count() > 0) {
            return Err(LoggerError::ManagerAlreadyRunning);
        }

        let shared = Arc::new(ManagerShared {
            queue: Mutex::new(Queue {
                pending: VecDeque::new(),
                running: true,
                closed: false,
            }),
            event: Event::auto_reset(),
            drained: Condvar::new(),
            registry: Mutex::new(HashMap::new()),
            metrics: LoggerMetrics::new(),
            poll_interval: config.poll_interval,
        });

        let writer_shared = Arc::clone(&shared);
        let writer = thread::Builder::new()
            .name("log-writer".to_string())
            .spawn(move || writer_loop(&writer_shared))
            .map_err(|e| {
                LoggerError::io_operation("starting log writer", "thread spawn failed", e)
            })?;

        *slot = Some(Arc::downgrade(&shared));
        Ok(Self {
            shared,
            writer: Some(writer),
        })
    }

    /// The registered logger called `name`, creating a console logger at
    /// `Debug` on first use
    pub fn get_logger(&self, name: &str) -> Logger {
        self.shared.get_logger(name)
    }

    /// Register `logger` under its name, replacing any previous entry
    pub fn set_logger(&self, logger: &Logger) {
        self.shared.set_logger(logger);
    }

    /// Route `logger` through the writer without registering it
    pub fn attach(&self, logger: &Logger) {
        logger.attach(Arc::downgrade(&self.shared));
    }

    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.shared.registry.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    /// Lines queued and not yet picked up by the writer
    pub fn pending(&self) -> usize {
        self.shared.queue.lock().pending.len()
    }

    /// Wait until every enqueued line has been written; false on timeout
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let metrics = &self.shared.metrics;
        let mut queue = self.shared.queue.lock();
        while metrics.delivered() < metrics.enqueued() {
            if self
                .shared
                .drained
                .wait_until(&mut queue, deadline)
                .timed_out()
            {
                return metrics.delivered() >= metrics.enqueued();
            }
        }
        true
    }
}

impl Drop for LogManager {
    fn drop(&mut self) {
        self.shared.queue.lock().running = false;
        self.shared.event.signal();

        if let Some(writer) = self.writer.take() {
            if writer.join().is_err() {
                eprintln!("[LOGGER ERROR] Log writer thread panicked during shutdown");
            }
        }

        // anything a panicked writer left behind
        let leftovers = {
            let mut queue = self.shared.queue.lock();
            queue.closed = true;
            std::mem::take(&mut queue.pending)
        };
        if !leftovers.is_empty() {
            self.shared.metrics.record_batch(leftovers.len());
            for pending in leftovers {
                pending.deliver();
            }
        }

        for (_, logger) in self.shared.registry.lock().drain() {
            logger.detach();
        }

        let mut slot = ACTIVE_MANAGER.lock();
        if slot
            .as_ref()
            .is_some_and(|live| std::ptr::eq(live.as_ptr(), Arc::as_ptr(&self.shared)))
        {
            *slot = None;
        }
    }
}

fn writer_loop(shared: &ManagerShared) {
    let mut running = true;
    loop {
        if running {
            shared.event.wait_timeout(shared.poll_interval);
        }

        let batch = {
            let mut queue = shared.queue.lock();
            running = queue.running;
            // closing under the lock means every accepted line is in a batch
            if !running && queue.pending.is_empty() {
                queue.closed = true;
                shared.drained.notify_all();
                break;
            }
            std::mem::take(&mut queue.pending)
        };

        if !batch.is_empty() {
            let size = batch.len();
            for pending in batch {
                pending.deliver();
            }
            shared.metrics.record_batch(size);

            let _queue = shared.queue.lock();
            shared.drained.notify_all();
        }
    }
}

fn active_manager() -> Result<Arc<ManagerShared>> {
    let slot = ACTIVE_MANAGER.lock();
    let live = slot.as_ref().ok_or(LoggerError::ManagerNotInitialized)?;
    match live.upgrade() {
        Some(shared) if shared.is_running() => Ok(shared),
        _ => Err(LoggerError::ManagerShuttingDown),
    }
}

/// [`LogManager::get_logger`] on the live manager
pub fn get_logger(name: &str) -> Result<Logger> {
    Ok(active_manager()?.get_logger(name))
}

/// [`LogManager::set_logger`] on the live manager
pub fn set_logger(logger: &Logger) -> Result<()> {
    active_manager()?.set_logger(logger);
    Ok(())
}
