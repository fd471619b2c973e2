//! Request counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Metrics {
    pub health_checks: AtomicU64,
    pub inventory_reads: AtomicU64,
    pub injected_faults: AtomicU64,
    pub database_errors: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_health_check(&self) {
        self.health_checks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_inventory_read(&self) {
        self.inventory_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_injected_fault(&self) {
        self.injected_faults.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_database_error(&self) {
        self.database_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            health_checks: self.health_checks.load(Ordering::Relaxed),
            inventory_reads: self.inventory_reads.load(Ordering::Relaxed),
            injected_faults: self.injected_faults.load(Ordering::Relaxed),
            database_errors: self.database_errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub health_checks: u64,
    pub inventory_reads: u64,
    pub injected_faults: u64,
    pub database_errors: u64,
}
