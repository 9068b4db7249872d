//! Logger metrics for observability
//!
//! Counters describing how lines move through a logger or a log manager.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// A [`Logger`](super::Logger) counts the lines it dispatches and the sink
/// writes that fail; a [`LogManager`](super::LogManager) additionally counts
/// what passes through its queue.
///
/// # Example
///
/// ```
/// use variadic_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_batch(3);
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.delivered(), 3);
/// assert_eq!(metrics.largest_batch(), 3);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines that reached at least one sink class
    dispatched: AtomicU64,

    /// Lines handed to the background writer
    enqueued: AtomicU64,

    /// Lines written by the background writer
    delivered: AtomicU64,

    /// Sink writes or flushes that failed or panicked
    write_failures: AtomicU64,

    /// Queue drains performed by the background writer
    batches: AtomicU64,

    largest_batch: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            enqueued: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            batches: AtomicU64::new(0),
            largest_batch: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn largest_batch(&self) -> u64 {
        self.largest_batch.load(Ordering::Relaxed)
    }

    /// Record a dispatched line, returning the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record one drained batch of `size` lines
    pub fn record_batch(&self, size: usize) {
        let size = size as u64;
        self.batches.fetch_add(1, Ordering::Relaxed);
        self.delivered.fetch_add(size, Ordering::Relaxed);
        self.largest_batch.fetch_max(size, Ordering::Relaxed);
    }

    /// Average lines per drained batch, 0.0 before the first batch
    pub fn average_batch(&self) -> f64 {
        let batches = self.batches();
        if batches == 0 {
            0.0
        } else {
            self.delivered() as f64 / batches as f64
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.enqueued.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.batches.store(0, Ordering::Relaxed);
        self.largest_batch.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched()),
            enqueued: AtomicU64::new(self.enqueued()),
            delivered: AtomicU64::new(self.delivered()),
            write_failures: AtomicU64::new(self.write_failures()),
            batches: AtomicU64::new(self.batches()),
            largest_batch: AtomicU64::new(self.largest_batch()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.dispatched(), 0);
        assert_eq!(metrics.enqueued(), 0);
        assert_eq!(metrics.delivered(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.batches(), 0);
        assert_eq!(metrics.largest_batch(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dispatched(), 0);
        assert_eq!(metrics.record_dispatched(), 1);
        assert_eq!(metrics.dispatched(), 2);
    }

    #[test]
    fn test_batches() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.average_batch(), 0.0);

        metrics.record_batch(4);
        metrics.record_batch(10);
        metrics.record_batch(1);

        assert_eq!(metrics.batches(), 3);
        assert_eq!(metrics.delivered(), 15);
        assert_eq!(metrics.largest_batch(), 10);
        assert_eq!(metrics.average_batch(), 5.0);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_enqueued();
        metrics.record_write_failure();
        metrics.record_batch(2);

        metrics.reset();

        assert_eq!(metrics.enqueued(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.largest_batch(), 0);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = LoggerMetrics::new();
        metrics.record_write_failure();

        let snapshot = metrics.clone();
        metrics.record_write_failure();

        assert_eq!(metrics.write_failures(), 2);
        assert_eq!(snapshot.write_failures(), 1);
    }
}
