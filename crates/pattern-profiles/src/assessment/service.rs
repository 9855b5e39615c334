use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::catalog::QuestionCatalog;
use super::domain::{ProfileResult, QuizResponse};
use super::mbti::{self, MbtiError};
use super::repository::{AssessmentRecord, Intake, SessionId, SessionStore, SessionStoreError};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::selector::{top_n, SHORTLIST};

/// Service composing the catalog, scoring engine, and session store.
pub struct AssessmentService<S> {
    store: Arc<S>,
    engine: Arc<ScoringEngine>,
    catalog: Arc<QuestionCatalog>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<S> AssessmentService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, config: ScoringConfig) -> Self {
        Self::with_catalog(store, config, QuestionCatalog::standard().clone())
    }

    pub fn with_catalog(store: Arc<S>, config: ScoringConfig, catalog: QuestionCatalog) -> Self {
        Self {
            store,
            engine: Arc::new(ScoringEngine::new(config)),
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Score responses without persisting anything.
    pub fn score(&self, responses: &[QuizResponse]) -> Vec<ProfileResult> {
        self.engine.score(responses, &self.catalog)
    }

    /// Score a completed questionnaire and append the bundle to the store.
    pub fn submit(
        &self,
        intake: Intake,
        responses: Vec<QuizResponse>,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let profile_results = self.score(&responses);
        let dominant = top_n(&profile_results, SHORTLIST).to_vec();

        let record = AssessmentRecord {
            session_id: next_session_id(),
            intake,
            responses,
            profile_results,
            dominant,
            recorded_at: Utc::now(),
        };

        let stored = self.store.append(record)?;
        info!(session_id = %stored.session_id, dominant = %stored.summary(), "assessment recorded");
        Ok(stored)
    }

    pub fn classify_mbti(&self, code: &str) -> Result<Vec<ProfileResult>, AssessmentServiceError> {
        Ok(mbti::classify(code)?)
    }

    pub fn get(&self, session_id: &SessionId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .store
            .fetch(session_id)?
            .ok_or(SessionStoreError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Classification(#[from] MbtiError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
