use std::fmt;

use serde::{Deserialize, Serialize};

/// The nine behavioral profiles a respondent can be classified into.
///
/// Declaration order is significant: it breaks ties whenever two profiles end
/// up with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileId {
    Achiever,
    Caregiver,
    Peacemaker,
    Rebel,
    Leader,
    Intellectual,
    Perfectionist,
    Adventurer,
    Individualist,
}

impl ProfileId {
    pub const COUNT: usize = 9;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Achiever,
            Self::Caregiver,
            Self::Peacemaker,
            Self::Rebel,
            Self::Leader,
            Self::Intellectual,
            Self::Perfectionist,
            Self::Adventurer,
            Self::Individualist,
        ]
    }

    /// Position in declaration order, usable as an array index.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Achiever => "achiever",
            Self::Caregiver => "caregiver",
            Self::Peacemaker => "peacemaker",
            Self::Rebel => "rebel",
            Self::Leader => "leader",
            Self::Intellectual => "intellectual",
            Self::Perfectionist => "perfectionist",
            Self::Adventurer => "adventurer",
            Self::Individualist => "individualist",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Directional contribution of an answer or slider to one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileWeight {
    pub profile: ProfileId,
    pub weight: f64,
}

impl ProfileWeight {
    pub const fn new(profile: ProfileId, weight: f64) -> Self {
        Self { profile, weight }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerId(pub String);

impl From<&str> for AnswerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selectable answer belonging to exactly one select-type question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub weights: Vec<ProfileWeight>,
}

/// Numeric range and weights for a slider question. Sliders have no discrete
/// answers, so the weights live here rather than on an [`Answer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderScale {
    pub min: f64,
    pub max: f64,
    pub min_label: String,
    pub max_label: String,
    pub weights: Vec<ProfileWeight>,
}

/// Input type of a question together with the data that type needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    SingleSelect { answers: Vec<Answer> },
    MultiSelect { answers: Vec<Answer> },
    ImageSelect { answers: Vec<Answer> },
    Slider(SliderScale),
}

impl QuestionKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SingleSelect { .. } => "single_select",
            Self::MultiSelect { .. } => "multi_select",
            Self::ImageSelect { .. } => "image_select",
            Self::Slider(_) => "slider",
        }
    }

    /// Discrete answers for select kinds; empty for sliders.
    pub fn answers(&self) -> &[Answer] {
        match self {
            Self::SingleSelect { answers }
            | Self::MultiSelect { answers }
            | Self::ImageSelect { answers } => answers,
            Self::Slider(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn answer(&self, id: &AnswerId) -> Option<&Answer> {
        self.kind.answers().iter().find(|answer| &answer.id == id)
    }
}

/// The value a respondent supplied for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseValue {
    AnswerId(AnswerId),
    AnswerIds(Vec<AnswerId>),
    SliderValue(f64),
}

/// One respondent answer. Callers supply at most one response per question;
/// duplicates are scored independently and therefore double count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub question_id: QuestionId,
    #[serde(flatten)]
    pub value: ResponseValue,
}

impl QuizResponse {
    pub fn single(question_id: &str, answer_id: &str) -> Self {
        Self {
            question_id: question_id.into(),
            value: ResponseValue::AnswerId(answer_id.into()),
        }
    }

    pub fn multiple(question_id: &str, answer_ids: &[&str]) -> Self {
        Self {
            question_id: question_id.into(),
            value: ResponseValue::AnswerIds(answer_ids.iter().map(|id| (*id).into()).collect()),
        }
    }

    pub fn slider(question_id: &str, value: f64) -> Self {
        Self {
            question_id: question_id.into(),
            value: ResponseValue::SliderValue(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Book,
    Exercise,
    Worksheet,
    Article,
    Tool,
}

/// Recommended follow-up material attached to a profile result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub kind: ResourceKind,
    pub description: String,
}

/// Descriptive text shown alongside a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileNarrative {
    pub tagline: String,
    pub summary: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// Engine output for one profile: computed score and percentage merged with
/// the registry metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub profile: ProfileId,
    pub name: String,
    pub narrative: ProfileNarrative,
    pub resources: Vec<Resource>,
    pub score: f64,
    pub percentage: u8,
}
