use tracing::debug;

use super::super::catalog::QuestionCatalog;
use super::super::domain::{
    AnswerId, ProfileId, Question, QuestionKind, QuizResponse, ResponseValue, SliderScale,
};
use super::config::{ScoringConfig, SliderNormalization};

/// Signed per-profile accumulator indexed by declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RawScores([f64; ProfileId::COUNT]);

impl RawScores {
    pub fn add(&mut self, profile: ProfileId, amount: f64) {
        self.0[profile.index()] += amount;
    }

    pub fn get(&self, profile: ProfileId) -> f64 {
        self.0[profile.index()]
    }

    /// Sum of the non-negative scores; negative scores never reduce the total.
    pub fn positive_total(&self) -> f64 {
        self.0.iter().map(|score| score.max(0.0)).sum()
    }

    pub fn percentage(&self, profile: ProfileId, total: f64) -> u8 {
        if total > 0.0 {
            (self.get(profile).max(0.0) / total * 100.0).round() as u8
        } else {
            0
        }
    }
}

pub(crate) fn accumulate(
    responses: &[QuizResponse],
    catalog: &QuestionCatalog,
    config: &ScoringConfig,
) -> RawScores {
    let mut scores = RawScores::default();

    for response in responses {
        let Some(question) = catalog.question(&response.question_id) else {
            debug!(question_id = %response.question_id, "skipping response for unknown question");
            continue;
        };

        match (&question.kind, &response.value) {
            (QuestionKind::Slider(scale), ResponseValue::SliderValue(value)) => {
                let normalized = normalize_slider(*value, scale, config.slider_normalization);
                for weight in &scale.weights {
                    scores.add(
                        weight.profile,
                        normalized * weight.weight * config.slider_scale,
                    );
                }
            }
            (
                QuestionKind::SingleSelect { .. } | QuestionKind::ImageSelect { .. },
                ResponseValue::AnswerId(answer_id),
            ) => apply_answer(&mut scores, question, answer_id),
            (QuestionKind::MultiSelect { .. }, ResponseValue::AnswerIds(answer_ids)) => {
                for answer_id in answer_ids {
                    apply_answer(&mut scores, question, answer_id);
                }
            }
            (kind, _) => {
                debug!(
                    question_id = %question.id,
                    kind = kind.label(),
                    "response shape does not match question kind; ignoring"
                );
            }
        }
    }

    scores
}

fn apply_answer(scores: &mut RawScores, question: &Question, answer_id: &AnswerId) {
    match question.answer(answer_id) {
        Some(answer) => {
            for weight in &answer.weights {
                scores.add(weight.profile, weight.weight);
            }
        }
        None => {
            debug!(question_id = %question.id, answer_id = %answer_id, "unknown answer contributes nothing");
        }
    }
}

/// Out-of-range values are passed through unclamped.
fn normalize_slider(value: f64, scale: &SliderScale, mode: SliderNormalization) -> f64 {
    match mode {
        SliderNormalization::FixedDivisor(divisor) => value / divisor,
        SliderNormalization::CatalogRange => (value - scale.min) / (scale.max - scale.min),
    }
}
