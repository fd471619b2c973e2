//! Database connectivity endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    pub latency_us: u64,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<DatabaseHealth>> {
    let latency_us = state.inventory.ping().map_err(|e| {
        state.metrics.record_database_error();
        e
    })?;
    tracing::debug!(latency_us, "database ping");
    Ok(Json(DatabaseHealth {
        status: "ok",
        latency_us,
    }))
}
