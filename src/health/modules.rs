//! Built-in health modules.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::error::Result;
use crate::health::HealthModule;
use crate::inventory::sqlite::InventoryStore;
use crate::telemetry::Metrics;

pub struct ProcessModule {
    started_at: DateTime<Utc>,
}

impl ProcessModule {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

impl HealthModule for ProcessModule {
    fn name(&self) -> &str {
        "process"
    }

    fn check(&self) -> Result<Value> {
        let uptime = (Utc::now() - self.started_at).num_seconds().max(0);
        Ok(json!({
            "status": "ok",
            "pid": std::process::id(),
            "started_at": self.started_at.to_rfc3339(),
            "uptime_seconds": uptime,
        }))
    }
}

pub struct DatabaseModule {
    store: Arc<InventoryStore>,
}

impl DatabaseModule {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

impl HealthModule for DatabaseModule {
    fn name(&self) -> &str {
        "database"
    }

    fn check(&self) -> Result<Value> {
        let latency_us = self.store.ping()?;
        Ok(json!({ "status": "ok", "latency_us": latency_us }))
    }
}

pub struct RequestsModule {
    metrics: Arc<Metrics>,
}

impl RequestsModule {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }
}

impl HealthModule for RequestsModule {
    fn name(&self) -> &str {
        "requests"
    }

    fn check(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.metrics.snapshot())?)
    }
}
