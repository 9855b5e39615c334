use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use pattern_profiles::assessment::{assessment_router, AssessmentService, SessionStore};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<S>(service: Arc<AssessmentService<S>>) -> axum::Router
where
    S: SessionStore + 'static,
{
    assessment_router(service)
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
    use crate::infra::InMemorySessionStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pattern_profiles::assessment::ScoringConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> axum::Router {
        let store = Arc::new(InMemorySessionStore::default());
        let service = Arc::new(AssessmentService::new(store, ScoringConfig::default()));
        with_assessment_routes(service)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn health_route_is_mounted_next_to_assessment_routes() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request builds"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router()
            .oneshot(
                Request::post("/api/v1/mbti/classify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"code":"INFP"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["results"][0]["profile"], "individualist");
    }
}
