use metrics_exporter_prometheus::PrometheusHandle;
use pattern_profiles::assessment::{AssessmentRecord, SessionId, SessionStore, SessionStoreError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store; records are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    records: Arc<Mutex<HashMap<SessionId, AssessmentRecord>>>,
}

impl InMemorySessionStore {
    pub(crate) fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl SessionStore for InMemorySessionStore {
    fn append(&self, record: AssessmentRecord) -> Result<AssessmentRecord, SessionStoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session store lock poisoned".to_string()))?;
        if guard.contains_key(&record.session_id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentRecord>, SessionStoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session store lock poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }
}
