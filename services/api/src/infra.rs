use interview_ai::config::PracticeConfig;
use interview_ai::workflows::practice::questions::QuestionSet;
use interview_ai::workflows::practice::session::generation::{
    GenerationError, PreferenceStore, QuestionSource, GENERATION_API_KEY, PREFERRED_LANGUAGE,
};
use interview_ai::workflows::practice::session::{
    RepositoryError, SessionId, SessionRecord, SessionRepository, SessionRequest,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<SessionRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.session_id.0.cmp(&a.session_id.0));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPreferenceStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let guard = self.values.lock().expect("preference mutex poisoned");
        guard.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut guard = self.values.lock().expect("preference mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
    }
}

/// Question source backed by the preference store. This build ships no
/// outbound generation client, so a configured key still reports the
/// service as unavailable and the session service draws locally.
pub(crate) struct PreferenceBackedQuestionSource<P> {
    preferences: Arc<P>,
}

impl<P: PreferenceStore> PreferenceBackedQuestionSource<P> {
    pub(crate) fn new(preferences: Arc<P>) -> Self {
        Self { preferences }
    }
}

impl<P: PreferenceStore> QuestionSource for PreferenceBackedQuestionSource<P> {
    fn generate(&self, _request: &SessionRequest) -> Result<QuestionSet, GenerationError> {
        match self.preferences.get(GENERATION_API_KEY) {
            None => Err(GenerationError::MissingApiKey),
            Some(_) => Err(GenerationError::Unavailable(
                "no generation endpoint in this build".to_string(),
            )),
        }
    }

    fn feedback(
        &self,
        _question: &str,
        _answer: &str,
        _language: &str,
    ) -> Result<String, GenerationError> {
        match self.preferences.get(GENERATION_API_KEY) {
            None => Err(GenerationError::MissingApiKey),
            Some(_) => Err(GenerationError::Unavailable(
                "no generation endpoint in this build".to_string(),
            )),
        }
    }
}

/// Seed durable preferences from the loaded configuration.
pub(crate) fn seed_preferences(preferences: &InMemoryPreferenceStore, config: &PracticeConfig) {
    preferences.set(PREFERRED_LANGUAGE, &config.default_language);
    if let Some(key) = &config.generation_api_key {
        preferences.set(GENERATION_API_KEY, key);
    }
}
