//! Axum router and server setup.
//! Used by: main, tests.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/inventory", get(handlers::inventory::list))
        .route("/api/inventory/:id", get(handlers::inventory::get))
        .route("/api/validateMessage", get(handlers::validate::validate))
        .route("/api/behaviors", get(handlers::behaviors::list))
        .route("/api/database/health", get(handlers::database::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(state, listener).await
}

pub async fn serve(state: AppState, listener: TcpListener) -> std::io::Result<()> {
    let router = build_router(state);
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::state::build_test_state;

    #[tokio::test]
    async fn read_only_endpoints_return_200() {
        let state = build_test_state().unwrap();
        for uri in [
            "/health",
            "/api/inventory",
            "/api/inventory/1",
            "/api/validateMessage",
            "/api/behaviors",
            "/api/database/health",
        ] {
            let response = build_router(state.clone())
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = build_router(build_test_state().unwrap())
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
