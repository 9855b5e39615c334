use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{ProfileId, ProfileResult, QuizResponse};
use crate::assessment::repository::{
    AssessmentRecord, SessionId, SessionStore, SessionStoreError,
};
use crate::assessment::{assessment_router, AssessmentService, ScoringConfig};

pub(super) fn full_questionnaire() -> Vec<QuizResponse> {
    vec![
        QuizResponse::single("q1", "q1a5"),
        QuizResponse::multiple("q2", &["q2a1", "q2a4"]),
        QuizResponse::slider("q3", 4.0),
        QuizResponse::single("q4", "q4a1"),
        QuizResponse::single("q5", "q5a2"),
        QuizResponse::slider("q6", 7.0),
        QuizResponse::multiple("q7", &["q7a1", "q7a5"]),
        QuizResponse::single("q8", "q8a4"),
        QuizResponse::single("q9", "q9a1"),
        QuizResponse::slider("q10", 6.0),
    ]
}

pub(super) fn score_of(results: &[ProfileResult], profile: ProfileId) -> f64 {
    results
        .iter()
        .find(|result| result.profile == profile)
        .map(|result| result.score)
        .expect("every profile is present")
}

pub(super) fn percentage_of(results: &[ProfileResult], profile: ProfileId) -> u8 {
    results
        .iter()
        .find(|result| result.profile == profile)
        .map(|result| result.percentage)
        .expect("every profile is present")
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

pub(super) fn build_service() -> (AssessmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentService::new(store.clone(), ScoringConfig::default());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<SessionId, AssessmentRecord>>>,
}

impl SessionStore for MemoryStore {
    fn append(&self, record: AssessmentRecord) -> Result<AssessmentRecord, SessionStoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentRecord>, SessionStoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictStore;

impl SessionStore for ConflictStore {
    fn append(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, SessionStoreError> {
        Err(SessionStoreError::Conflict)
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AssessmentRecord>, SessionStoreError> {
        Ok(None)
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn append(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, SessionStoreError> {
        Err(SessionStoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AssessmentRecord>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn router_with_service(service: AssessmentService<MemoryStore>) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
