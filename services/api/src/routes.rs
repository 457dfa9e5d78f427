use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use jobportal::board::listings::ListingStore;
use jobportal::board::router::{board_router, BoardState};
use serde_json::json;

pub(crate) fn with_board_routes<S>(state: BoardState<S>) -> axum::Router
where
    S: ListingStore + 'static,
{
    board_router(state)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryListingStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use jobportal::board::listings::CatalogService;
    use jobportal::board::session::SessionManager;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn board_state() -> BoardState<InMemoryListingStore> {
        BoardState {
            sessions: Arc::new(SessionManager::immediate()),
            catalog: CatalogService::new(Arc::new(InMemoryListingStore::seeded())),
        }
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(payload) = healthcheck().await;
        assert_eq!(payload, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn board_routes_serve_the_seeded_catalog() {
        let router = with_board_routes(board_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/jobs")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert!(payload["total"].as_u64().expect("total") >= 1);
    }
}
