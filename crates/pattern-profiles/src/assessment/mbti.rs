//! Alternate classification path driven by an externally supplied 16-type
//! personality code instead of questionnaire responses.

use serde::Serialize;
use tracing::warn;

use super::domain::{ProfileId, ProfileNarrative, ProfileResult, Resource, ResourceKind};
use super::registry::ProfileRegistry;
use super::selector::{top_n, SHORTLIST};

/// One row of the type table. `weights` follows [`ProfileId`] declaration
/// order and sums to at most 1.
#[derive(Debug, Serialize)]
pub struct MbtiProfile {
    pub code: &'static str,
    pub nickname: &'static str,
    pub weights: [f64; ProfileId::COUNT],
    pub rationale: &'static str,
}

impl MbtiProfile {
    pub fn all() -> &'static [MbtiProfile] {
        &MBTI_PROFILES
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(code: &str) -> Result<&'static MbtiProfile, MbtiError> {
        MBTI_PROFILES
            .iter()
            .find(|profile| profile.code == code)
            .ok_or_else(|| {
                warn!(code, "unknown MBTI code");
                MbtiError::NotFound {
                    code: code.to_string(),
                }
            })
    }

    pub fn weight(&self, profile: ProfileId) -> f64 {
        self.weights[profile.index()]
    }

    fn result_for(&self, profile: ProfileId, percentage: u8) -> ProfileResult {
        let descriptor = ProfileRegistry::get(profile);
        let narrative = ProfileNarrative {
            tagline: descriptor.tagline.to_string(),
            summary: format!(
                "As an {} ({}), you lean toward {} patterns. {}",
                self.code, self.nickname, descriptor.name, self.rationale
            ),
            strengths: descriptor.strengths.iter().map(|s| s.to_string()).collect(),
            growth_areas: descriptor
                .growth_areas
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        ProfileResult {
            profile,
            name: descriptor.name.to_string(),
            narrative,
            resources: vec![
                Resource {
                    title: "Personality Pattern Journal".to_string(),
                    kind: ResourceKind::Tool,
                    description: format!(
                        "Log situations where your {} preferences shape how you respond.",
                        self.code
                    ),
                },
                Resource {
                    title: "Profile Comparison Guide".to_string(),
                    kind: ResourceKind::Tool,
                    description: format!(
                        "Compare {} tendencies with the other profiles {} types share.",
                        descriptor.name, self.code
                    ),
                },
            ],
            score: self.weight(profile),
            percentage,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MbtiError {
    #[error("unknown MBTI code '{code}'")]
    NotFound { code: String },
}

/// Every profile with a non-zero rounded percentage, highest first. Ties keep
/// declaration order.
pub fn weighted(code: &str) -> Result<Vec<ProfileResult>, MbtiError> {
    let row = MbtiProfile::lookup(code)?;

    let mut results: Vec<ProfileResult> = ProfileId::ordered()
        .into_iter()
        .filter_map(|profile| {
            let percentage = (row.weight(profile) * 100.0).round() as u8;
            (percentage > 0).then(|| row.result_for(profile, percentage))
        })
        .collect();

    results.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    Ok(results)
}

/// The two dominant profiles for `code`.
pub fn classify(code: &str) -> Result<Vec<ProfileResult>, MbtiError> {
    let results = weighted(code)?;
    Ok(top_n(&results, SHORTLIST).to_vec())
}

const fn row(
    code: &'static str,
    nickname: &'static str,
    weights: [f64; ProfileId::COUNT],
    rationale: &'static str,
) -> MbtiProfile {
    MbtiProfile {
        code,
        nickname,
        weights,
        rationale,
    }
}

// Column order: achiever, caregiver, peacemaker, rebel, leader, intellectual,
// perfectionist, adventurer, individualist.
static MBTI_PROFILES: [MbtiProfile; 16] = [
    row(
        "INTJ",
        "The Architect",
        [0.25, 0.05, 0.0, 0.10, 0.0, 0.60, 0.0, 0.0, 0.0],
        "Strategic, independent thinking and long-range planning point to the intellectual, with a strong drive to see plans through.",
    ),
    row(
        "INTP",
        "The Logician",
        [0.0, 0.0, 0.0, 0.15, 0.0, 0.55, 0.0, 0.10, 0.20],
        "A love of theory and systems comes first, paired with an unconventional streak.",
    ),
    row(
        "ENTJ",
        "The Commander",
        [0.30, 0.0, 0.0, 0.0, 0.55, 0.10, 0.05, 0.0, 0.0],
        "Decisive direction-setting and an appetite for results define how this type shows up in groups.",
    ),
    row(
        "ENTP",
        "The Debater",
        [0.0, 0.0, 0.0, 0.40, 0.10, 0.20, 0.0, 0.30, 0.0],
        "Challenging assumptions and chasing new ideas are the hallmarks of this type.",
    ),
    row(
        "INFJ",
        "The Advocate",
        [0.0, 0.40, 0.20, 0.0, 0.0, 0.10, 0.0, 0.0, 0.30],
        "Deep concern for others combines with a strong personal vision.",
    ),
    row(
        "INFP",
        "The Mediator",
        [0.0, 0.20, 0.25, 0.05, 0.0, 0.0, 0.0, 0.0, 0.50],
        "Authenticity and inner values lead, softened by a wish for harmony.",
    ),
    row(
        "ENFJ",
        "The Protagonist",
        [0.05, 0.45, 0.15, 0.0, 0.35, 0.0, 0.0, 0.0, 0.0],
        "Supporting people and rallying them toward a shared goal go hand in hand.",
    ),
    row(
        "ENFP",
        "The Campaigner",
        [0.0, 0.15, 0.0, 0.15, 0.0, 0.0, 0.0, 0.40, 0.30],
        "Enthusiasm for new possibilities and self-expression drive this type.",
    ),
    row(
        "ISTJ",
        "The Logistician",
        [0.25, 0.0, 0.15, 0.0, 0.0, 0.10, 0.50, 0.0, 0.0],
        "Dependability, order, and attention to detail sit at the core.",
    ),
    row(
        "ISFJ",
        "The Defender",
        [0.0, 0.55, 0.20, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0],
        "Quiet, careful devotion to the people they look after.",
    ),
    row(
        "ESTJ",
        "The Executive",
        [0.25, 0.0, 0.0, 0.0, 0.45, 0.0, 0.30, 0.0, 0.0],
        "Organizing people and processes to a high standard comes naturally.",
    ),
    row(
        "ESFJ",
        "The Consul",
        [0.0, 0.50, 0.25, 0.0, 0.15, 0.0, 0.10, 0.0, 0.0],
        "Warm, sociable care for the community and a wish to keep it running smoothly.",
    ),
    row(
        "ISTP",
        "The Virtuoso",
        [0.0, 0.0, 0.0, 0.20, 0.0, 0.30, 0.0, 0.40, 0.10],
        "Hands-on experimentation and cool-headed analysis in equal measure.",
    ),
    row(
        "ISFP",
        "The Adventurer",
        [0.0, 0.0, 0.30, 0.0, 0.0, 0.0, 0.0, 0.25, 0.45],
        "Gentle self-expression and openness to new experiences.",
    ),
    row(
        "ESTP",
        "The Entrepreneur",
        [0.25, 0.0, 0.0, 0.15, 0.10, 0.0, 0.0, 0.50, 0.0],
        "Action first: energetic risk-taking aimed at tangible wins.",
    ),
    row(
        "ESFP",
        "The Entertainer",
        [0.0, 0.25, 0.10, 0.0, 0.0, 0.0, 0.0, 0.45, 0.20],
        "Spontaneous, people-focused energy that lives in the moment.",
    ),
];
