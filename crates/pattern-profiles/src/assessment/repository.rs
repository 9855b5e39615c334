use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ProfileResult, QuizResponse};

/// Key under which a completed assessment is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional context collected before the questionnaire starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intake {
    pub respondent_name: Option<String>,
    pub age_range: Option<String>,
    pub focus_area: Option<String>,
}

/// Result bundle handed to the session store once an assessment completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub session_id: SessionId,
    pub intake: Intake,
    pub responses: Vec<QuizResponse>,
    pub profile_results: Vec<ProfileResult>,
    pub dominant: Vec<ProfileResult>,
    pub recorded_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Human readable list of the dominant profiles, e.g. `The Achiever (75%)`.
    pub fn summary(&self) -> String {
        if self.dominant.is_empty() {
            return "no dominant profile".to_string();
        }
        self.dominant
            .iter()
            .map(|result| format!("{} ({}%)", result.name, result.percentage))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Key-value persistence for completed assessments.
pub trait SessionStore: Send + Sync {
    fn append(&self, record: AssessmentRecord) -> Result<AssessmentRecord, SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentRecord>, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already recorded")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
