//! Health check endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;

use crate::error::Result;
use crate::health::HealthSnapshot;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthSnapshot>> {
    tracing::info!(path = "/health", "get");
    state.metrics.record_health_check();
    let snapshot = state.health.status()?;
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::error::{Error, Result};
    use crate::health::{HealthAggregator, HealthSnapshot};
    use crate::server::build_router;
    use crate::state::{build_test_state, build_test_state_with_health};

    struct Empty;

    impl HealthAggregator for Empty {
        fn status(&self) -> Result<HealthSnapshot> {
            Ok(HealthSnapshot::new())
        }
    }

    struct Unavailable;

    impl HealthAggregator for Unavailable {
        fn status(&self) -> Result<HealthSnapshot> {
            Err(Error::Health("aggregator offline".into()))
        }
    }

    async fn get_health(state: crate::state::AppState) -> (StatusCode, String) {
        let response = build_router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), 1_000_000).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn default_modules_are_reported() {
        let (status, body) = get_health(build_test_state().unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["process"]["status"], "ok");
        assert_eq!(json["database"]["status"], "ok");
        assert_eq!(json["requests"]["health_checks"], 1);
    }

    #[tokio::test]
    async fn empty_snapshot_is_an_empty_object() {
        let state = build_test_state_with_health(Arc::new(Empty)).unwrap();
        let (status, body) = get_health(state).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn aggregator_failure_reaches_error_layer() {
        let state = build_test_state_with_health(Arc::new(Unavailable)).unwrap();
        let (status, body) = get_health(state).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("aggregator offline"));
    }
}
