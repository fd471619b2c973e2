//! Lists the fault-injection headers the service understands.
//! Used by: server.

use axum::Json;

use crate::inventory::behavior::{BehaviorInfo, DemoBehavior};

pub async fn list() -> Json<Vec<BehaviorInfo>> {
    Json(DemoBehavior::ALL.into_iter().map(DemoBehavior::info).collect())
}
