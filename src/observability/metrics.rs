//! Request counters
//!
//! - Counters only, monotonic, reset on process start
//! - Relaxed atomics; exact totals, no cross-counter consistency

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by every request
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Requests answered with 2xx/3xx
    requests_served: AtomicU64,
    /// Requests answered with 4xx
    requests_rejected: AtomicU64,
    /// Requests answered with 5xx
    requests_failed: AtomicU64,
    /// Records returned by country lookups, before projection
    records_returned: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished request by its status code
    pub fn record_status(&self, status: u16) {
        let counter = match status {
            500.. => &self.requests_failed,
            400..=499 => &self.requests_rejected,
            _ => &self.requests_served,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_records_returned(&self, count: u64) {
        self.records_returned.fetch_add(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_served: self.requests_served.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            records_returned: self.records_returned.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_served: u64,
    pub requests_rejected: u64,
    pub requests_failed: u64,
    pub records_returned: u64,
}
