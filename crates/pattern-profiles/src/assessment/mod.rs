//! Questionnaire scoring and MBTI classification onto the shared profile space.
//!
//! The static tables (catalog, registry, MBTI types) are initialized once and
//! never mutated. Scoring is a pure function of its inputs; the only stateful
//! piece is the [`SessionStore`] that callers plug into [`AssessmentService`].

pub mod catalog;
pub mod domain;
pub mod mbti;
pub mod registry;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod selector;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{
    Answer, AnswerId, ProfileId, ProfileNarrative, ProfileResult, ProfileWeight, Question,
    QuestionId, QuestionKind, QuizResponse, Resource, ResourceKind, ResponseValue, SliderScale,
};
pub use mbti::{MbtiError, MbtiProfile};
pub use registry::{ProfileDescriptor, ProfileRegistry};
pub use repository::{AssessmentRecord, Intake, SessionId, SessionStore, SessionStoreError};
pub use router::{assessment_router, ClassifyRequest, ClassifyResponse, SubmitAssessmentRequest};
pub use scoring::{ScoringConfig, ScoringEngine, SliderNormalization};
pub use selector::{top_n, BREAKDOWN, DOMINANT, SHORTLIST};
pub use service::{AssessmentService, AssessmentServiceError};
