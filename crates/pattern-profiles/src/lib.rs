//! Behavioral profile assessment: questionnaire scoring, MBTI lookup, and the
//! service/router plumbing used by the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
