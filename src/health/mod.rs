//! Process health aggregation.
//!
//! The `/health` handler only sees [`HealthAggregator`]; the default
//! implementation, [`HealthModules`], asks each registered module for its
//! status and collects the answers into one [`HealthSnapshot`].
//!
//! Used by: handlers::health, state.

pub mod modules;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;

/// Subsystem name to status value. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HealthSnapshot(BTreeMap<String, Value>);

impl HealthSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, status: Value) {
        self.0.insert(name.into(), status);
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub trait HealthAggregator: Send + Sync {
    fn status(&self) -> Result<HealthSnapshot>;
}

/// One subsystem's contribution to the snapshot.
pub trait HealthModule: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self) -> Result<Value>;
}

#[derive(Default)]
pub struct HealthModules {
    modules: Vec<Box<dyn HealthModule>>,
}

impl HealthModules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, module: impl HealthModule + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }
}

impl HealthAggregator for HealthModules {
    // A failing module is reported in place and never fails the snapshot.
    fn status(&self) -> Result<HealthSnapshot> {
        let mut snapshot = HealthSnapshot::new();
        for module in &self.modules {
            let status = match module.check() {
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!(module = module.name(), error = %e, "health module failed");
                    json!({ "status": "error", "error": e.to_string() })
                }
            };
            snapshot.insert(module.name(), status);
        }
        Ok(snapshot)
    }
}
