use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ProfileResult, QuizResponse};
use super::registry::ProfileRegistry;
use super::repository::{Intake, SessionId, SessionStore, SessionStoreError};
use super::service::{AssessmentService, AssessmentServiceError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub intake: Intake,
    pub responses: Vec<QuizResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub code: String,
    pub results: Vec<ProfileResult>,
}

/// Router builder exposing the questionnaire, scoring, and MBTI endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<S>))
        .route(
            "/api/v1/assessments/:session_id",
            get(session_handler::<S>),
        )
        .route("/api/v1/mbti/classify", post(classify_handler::<S>))
        .route("/api/v1/catalog", get(catalog_handler::<S>))
        .route("/api/v1/profiles", get(profiles_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Json(request): Json<SubmitAssessmentRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.submit(request.intake, request.responses) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(AssessmentServiceError::Store(SessionStoreError::Conflict)) => {
            let payload = json!({
                "error": "session already recorded",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn session_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(AssessmentServiceError::Store(SessionStoreError::NotFound)) => {
            let payload = json!({
                "session_id": id.0,
                "error": "session not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn classify_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Json(request): Json<ClassifyRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.classify_mbti(&request.code) {
        Ok(results) => {
            let body = ClassifyResponse {
                code: request.code,
                results,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error @ AssessmentServiceError::Classification(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: SessionStore + 'static,
{
    (StatusCode::OK, Json(service.catalog().clone())).into_response()
}

pub(crate) async fn profiles_handler() -> Response {
    (StatusCode::OK, Json(ProfileRegistry::descriptors())).into_response()
}
