mod config;
mod rules;

pub use config::{ScoringConfig, SliderNormalization, REFERENCE_SLIDER_DIVISOR, SLIDER_SCALE};

use std::cmp::Ordering;

use super::catalog::QuestionCatalog;
use super::domain::{ProfileId, ProfileResult, QuizResponse};
use super::registry::ProfileRegistry;

/// Stateless engine that folds quiz responses into per-profile results.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `responses` against `catalog`.
    ///
    /// Always returns one result per profile, sorted by raw score descending.
    /// Equal scores keep declaration order. Responses are trusted to carry at
    /// most one entry per question; duplicates are each folded in.
    pub fn score(&self, responses: &[QuizResponse], catalog: &QuestionCatalog) -> Vec<ProfileResult> {
        let raw = rules::accumulate(responses, catalog, &self.config);
        let total = raw.positive_total();

        let mut results: Vec<ProfileResult> = ProfileId::ordered()
            .into_iter()
            .map(|profile| {
                ProfileRegistry::get(profile).result(raw.get(profile), raw.percentage(profile, total))
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results
    }
}

/// Scores with the reference configuration.
pub fn score(responses: &[QuizResponse], catalog: &QuestionCatalog) -> Vec<ProfileResult> {
    ScoringEngine::default().score(responses, catalog)
}
