//! Shared application state.

use std::sync::Arc;

use crate::error::Result;
use crate::health::modules::{DatabaseModule, ProcessModule, RequestsModule};
use crate::health::{HealthAggregator, HealthModules};
use crate::inventory::sqlite::InventoryStore;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub health: Arc<dyn HealthAggregator>,
    pub inventory: Arc<InventoryStore>,
    pub metrics: Arc<Metrics>,
}

pub type AppState = Arc<AppStateInner>;

struct StateBuilder {
    inventory: InventoryStore,
    health: Option<Arc<dyn HealthAggregator>>,
}

impl StateBuilder {
    fn build(self) -> AppState {
        let inventory = Arc::new(self.inventory);
        let metrics = Arc::new(Metrics::new());
        let health: Arc<dyn HealthAggregator> = match self.health {
            Some(health) => health,
            None => Arc::new(
                HealthModules::new()
                    .register(ProcessModule::new())
                    .register(DatabaseModule::new(inventory.clone()))
                    .register(RequestsModule::new(metrics.clone())),
            ),
        };

        Arc::new(AppStateInner {
            health,
            inventory,
            metrics,
        })
    }
}

pub fn build_state(db_path: &str) -> Result<AppState> {
    Ok(StateBuilder {
        inventory: InventoryStore::open(db_path)?,
        health: None,
    }
    .build())
}

pub fn build_test_state() -> Result<AppState> {
    Ok(StateBuilder {
        inventory: InventoryStore::open_in_memory()?,
        health: None,
    }
    .build())
}

/// Test state whose `/health` answers come from `health` instead of the built-in modules.
pub fn build_test_state_with_health(health: Arc<dyn HealthAggregator>) -> Result<AppState> {
    Ok(StateBuilder {
        inventory: InventoryStore::open_in_memory()?,
        health: Some(health),
    }
    .build())
}
