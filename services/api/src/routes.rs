use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use dental_leads::workflows::lead_intake::{lead_router, DocumentStore, LeadIntakeService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_lead_routes<S>(service: Arc<LeadIntakeService<S>>) -> axum::Router
where
    S: DocumentStore + 'static,
{
    lead_router(service)
        .route("/", axum::routing::get(root_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn root_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "message": "Dental Leads Backend" }))
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
    use crate::infra::InMemoryDocumentStore;
    use axum::body::Body;
    use axum::http::Request;
    use dental_leads::config::StorageConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    fn router() -> axum::Router {
        let service = LeadIntakeService::new(
            Arc::new(InMemoryDocumentStore::default()),
            &StorageConfig::default(),
        );
        with_lead_routes(Arc::new(service))
    }

    #[tokio::test]
    async fn root_endpoint_returns_banner() {
        let Json(body) = root_endpoint().await;
        assert_eq!(body, json!({ "message": "Dental Leads Backend" }));
    }

    #[tokio::test]
    async fn lead_routes_are_mounted_alongside_root() {
        let response = router()
            .oneshot(
                Request::post("/api/lead-intake")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "nome": "Lia", "disc_respostas": ["b", "B", "a"] }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload["disc_tipo"], json!("I"));

        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_endpoint_renders_text_exposition() {
        // Detached recorder; nothing is installed globally.
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState {
            metrics: Arc::new(handle),
        };

        let response = router()
            .layer(Extension(state))
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; version=0.0.4"
        );
    }
}
