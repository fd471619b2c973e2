//! Inventory endpoints with demo fault injection.
//! Used by: server.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::error::{Error, Result};
use crate::inventory::behavior::DemoBehavior;
use crate::inventory::sqlite::InventoryItem;
use crate::state::{AppState, AppStateInner};

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<InventoryItem>>> {
    let behaviors = DemoBehavior::from_headers(&headers);
    let items = read_with(&state, &behaviors, || state.inventory.list())?;
    Ok(Json(items))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<InventoryItem>> {
    let behaviors = DemoBehavior::from_headers(&headers);
    let item = read_with(&state, &behaviors, || state.inventory.get(id))?;
    item.map(Json)
        .ok_or_else(|| Error::NotFound(format!("inventory item {}", id)))
}

/// Runs `read`, bracketed by whichever invalid queries `behaviors` ask for.
fn read_with<T>(
    state: &AppStateInner,
    behaviors: &[DemoBehavior],
    read: impl FnOnce() -> Result<T>,
) -> Result<T> {
    state.metrics.record_inventory_read();
    if behaviors.contains(&DemoBehavior::InvalidQueryPre) {
        inject(state, DemoBehavior::InvalidQueryPre)?;
    }
    let out = read().map_err(|e| {
        state.metrics.record_database_error();
        e
    })?;
    if behaviors.contains(&DemoBehavior::InvalidQueryPost) {
        inject(state, DemoBehavior::InvalidQueryPost)?;
    }
    Ok(out)
}

fn inject(state: &AppStateInner, behavior: DemoBehavior) -> Result<()> {
    tracing::warn!(header = behavior.header(), "injecting invalid query");
    state.metrics.record_injected_fault();
    state.inventory.invalid_query().map_err(|e| {
        state.metrics.record_database_error();
        e
    })
}
