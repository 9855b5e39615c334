use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::domain::{
    Answer, AnswerId, ProfileId, ProfileWeight, Question, QuestionId, QuestionKind, SliderScale,
};

/// Ordered, read-only list of questionnaire questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The built-in questionnaire, initialized once per process.
    pub fn standard() -> &'static QuestionCatalog {
        static STANDARD: OnceLock<QuestionCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| QuestionCatalog {
            questions: standard_questions(),
        })
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let catalog = Self { questions };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::from_questions(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_questions = HashSet::new();
        for question in &self.questions {
            if !seen_questions.insert(&question.id) {
                return Err(CatalogError::DuplicateQuestion {
                    question: question.id.clone(),
                });
            }

            match &question.kind {
                QuestionKind::SingleSelect { answers }
                | QuestionKind::MultiSelect { answers }
                | QuestionKind::ImageSelect { answers } => {
                    if answers.is_empty() {
                        return Err(CatalogError::EmptyAnswers {
                            question: question.id.clone(),
                        });
                    }
                    let mut seen_answers = HashSet::new();
                    for answer in answers {
                        if !seen_answers.insert(&answer.id) {
                            return Err(CatalogError::DuplicateAnswer {
                                question: question.id.clone(),
                                answer: answer.id.clone(),
                            });
                        }
                    }
                }
                QuestionKind::Slider(scale) => {
                    // Written negated so NaN bounds are rejected too.
                    if !(scale.min < scale.max) {
                        return Err(CatalogError::InvalidRange {
                            question: question.id.clone(),
                            min: scale.min,
                            max: scale.max,
                        });
                    }
                    if scale.weights.is_empty() {
                        return Err(CatalogError::MissingSliderWeights {
                            question: question.id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Structural problems detected while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question {question} has no answers")]
    EmptyAnswers { question: QuestionId },
    #[error("slider {question} has an empty range ({min}..{max})")]
    InvalidRange {
        question: QuestionId,
        min: f64,
        max: f64,
    },
    #[error("slider {question} carries no profile weights")]
    MissingSliderWeights { question: QuestionId },
    #[error("question id {question} appears more than once")]
    DuplicateQuestion { question: QuestionId },
    #[error("answer {answer} appears more than once in question {question}")]
    DuplicateAnswer {
        question: QuestionId,
        answer: AnswerId,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

fn w(profile: ProfileId, weight: f64) -> ProfileWeight {
    ProfileWeight::new(profile, weight)
}

fn answer(id: &str, text: &str, weights: Vec<ProfileWeight>) -> Answer {
    Answer {
        id: id.into(),
        text: text.to_string(),
        image: None,
        weights,
    }
}

fn image_answer(id: &str, text: &str, image: &str, weights: Vec<ProfileWeight>) -> Answer {
    Answer {
        image: Some(image.to_string()),
        ..answer(id, text, weights)
    }
}

fn slider(
    id: &str,
    text: &str,
    min_label: &str,
    max_label: &str,
    weights: Vec<ProfileWeight>,
) -> Question {
    Question {
        id: id.into(),
        text: text.to_string(),
        kind: QuestionKind::Slider(SliderScale {
            min: 0.0,
            max: 10.0,
            min_label: min_label.to_string(),
            max_label: max_label.to_string(),
            weights,
        }),
    }
}

fn standard_questions() -> Vec<Question> {
    use ProfileId::*;

    vec![
        Question {
            id: "q1".into(),
            text: "When you start something new, what matters most to you?".to_string(),
            kind: QuestionKind::SingleSelect {
                answers: vec![
                    answer(
                        "q1a1",
                        "That everyone involved feels looked after",
                        vec![w(Caregiver, 3.0), w(Peacemaker, 1.0)],
                    ),
                    answer(
                        "q1a2",
                        "Understanding exactly how it works",
                        vec![w(Intellectual, 3.0), w(Perfectionist, 1.0)],
                    ),
                    answer(
                        "q1a3",
                        "Doing it my own way, not the expected way",
                        vec![w(Rebel, 2.0), w(Individualist, 2.0)],
                    ),
                    answer(
                        "q1a4",
                        "The thrill of not knowing how it will turn out",
                        vec![w(Adventurer, 3.0), w(Perfectionist, -1.0)],
                    ),
                    answer(
                        "q1a5",
                        "Setting a clear goal and hitting it",
                        vec![w(Achiever, 3.0), w(Leader, 1.0)],
                    ),
                ],
            },
        },
        Question {
            id: "q2".into(),
            text: "Which of these describe how you like to spend a free weekend?".to_string(),
            kind: QuestionKind::MultiSelect {
                answers: vec![
                    answer(
                        "q2a1",
                        "Catching up with a long reading list",
                        vec![w(Intellectual, 2.0)],
                    ),
                    answer(
                        "q2a2",
                        "Hosting friends or family",
                        vec![w(Caregiver, 2.0), w(Leader, 0.5)],
                    ),
                    answer(
                        "q2a3",
                        "Booking a last-minute trip",
                        vec![w(Adventurer, 2.0)],
                    ),
                    answer(
                        "q2a4",
                        "Working on a creative side project",
                        vec![w(Individualist, 2.0), w(Achiever, 0.5)],
                    ),
                    answer(
                        "q2a5",
                        "Reorganizing the house until it is just right",
                        vec![w(Perfectionist, 2.0)],
                    ),
                    answer(
                        "q2a6",
                        "Nothing planned, just quiet time",
                        vec![w(Peacemaker, 2.0), w(Achiever, -1.0)],
                    ),
                ],
            },
        },
        slider(
            "q3",
            "How important is it that everyone around you stays comfortable?",
            "Not my concern",
            "Absolutely essential",
            vec![
                w(Caregiver, 0.3),
                w(Peacemaker, 0.3),
                w(Rebel, -0.2),
                w(Leader, -0.2),
            ],
        ),
        Question {
            id: "q4".into(),
            text: "Pick the place that feels most like you.".to_string(),
            kind: QuestionKind::ImageSelect {
                answers: vec![
                    image_answer(
                        "q4a1",
                        "A mountain summit at sunrise",
                        "images/q4/summit.jpg",
                        vec![w(Achiever, 2.0), w(Adventurer, 1.0)],
                    ),
                    image_answer(
                        "q4a2",
                        "A library reading room",
                        "images/q4/library.jpg",
                        vec![w(Intellectual, 2.0), w(Peacemaker, 0.5)],
                    ),
                    image_answer(
                        "q4a3",
                        "A graffiti-covered alley",
                        "images/q4/alley.jpg",
                        vec![w(Rebel, 2.0), w(Individualist, 1.0)],
                    ),
                    image_answer(
                        "q4a4",
                        "A crowded kitchen table",
                        "images/q4/kitchen.jpg",
                        vec![w(Caregiver, 2.0), w(Peacemaker, 1.0)],
                    ),
                    image_answer(
                        "q4a5",
                        "A boardroom with a view",
                        "images/q4/boardroom.jpg",
                        vec![w(Leader, 2.0), w(Perfectionist, 0.5)],
                    ),
                ],
            },
        },
        Question {
            id: "q5".into(),
            text: "A disagreement breaks out in your group. What do you do?".to_string(),
            kind: QuestionKind::SingleSelect {
                answers: vec![
                    answer(
                        "q5a1",
                        "Calm things down and find common ground",
                        vec![w(Peacemaker, 3.0)],
                    ),
                    answer(
                        "q5a2",
                        "Take charge and make the call",
                        vec![w(Leader, 3.0), w(Peacemaker, -1.0)],
                    ),
                    answer(
                        "q5a3",
                        "Question why the rules are set up this way at all",
                        vec![w(Rebel, 3.0)],
                    ),
                    answer(
                        "q5a4",
                        "Check on whoever seems most upset",
                        vec![w(Caregiver, 2.0), w(Peacemaker, 1.0)],
                    ),
                    answer(
                        "q5a5",
                        "Gather the facts before weighing in",
                        vec![w(Intellectual, 2.0), w(Perfectionist, 1.0)],
                    ),
                ],
            },
        },
        slider(
            "q6",
            "How comfortable are you taking risks?",
            "I avoid them",
            "I seek them out",
            vec![
                w(Adventurer, 0.4),
                w(Rebel, 0.2),
                w(Perfectionist, -0.3),
                w(Peacemaker, -0.1),
            ],
        ),
        Question {
            id: "q7".into(),
            text: "Which compliments mean the most to you?".to_string(),
            kind: QuestionKind::MultiSelect {
                answers: vec![
                    answer("q7a1", "\"You get things done.\"", vec![w(Achiever, 2.0)]),
                    answer(
                        "q7a2",
                        "\"You always know what to say.\"",
                        vec![w(Caregiver, 1.5), w(Peacemaker, 0.5)],
                    ),
                    answer("q7a3", "\"You are one of a kind.\"", vec![w(Individualist, 2.0)]),
                    answer(
                        "q7a4",
                        "\"You never miss a detail.\"",
                        vec![w(Perfectionist, 2.0)],
                    ),
                    answer(
                        "q7a5",
                        "\"People follow your lead.\"",
                        vec![w(Leader, 2.0)],
                    ),
                    answer(
                        "q7a6",
                        "\"You are fearless.\"",
                        vec![w(Adventurer, 1.5), w(Rebel, 0.5)],
                    ),
                ],
            },
        },
        Question {
            id: "q8".into(),
            text: "How do you usually make an important decision?".to_string(),
            kind: QuestionKind::SingleSelect {
                answers: vec![
                    answer(
                        "q8a1",
                        "I research every option thoroughly",
                        vec![w(Intellectual, 2.0), w(Perfectionist, 1.0)],
                    ),
                    answer(
                        "q8a2",
                        "I go with my gut",
                        vec![w(Adventurer, 2.0), w(Individualist, 1.0)],
                    ),
                    answer(
                        "q8a3",
                        "I ask the people it affects",
                        vec![w(Caregiver, 1.0), w(Peacemaker, 2.0)],
                    ),
                    answer(
                        "q8a4",
                        "I pick whatever moves me closest to my goals",
                        vec![w(Achiever, 2.0), w(Leader, 1.0)],
                    ),
                ],
            },
        },
        Question {
            id: "q9".into(),
            text: "Choose the workspace you would pick.".to_string(),
            kind: QuestionKind::ImageSelect {
                answers: vec![
                    image_answer(
                        "q9a1",
                        "Spotless desk with labeled drawers",
                        "images/q9/tidy-desk.jpg",
                        vec![w(Perfectionist, 2.0), w(Achiever, 0.5)],
                    ),
                    image_answer(
                        "q9a2",
                        "Studio covered in sketches",
                        "images/q9/studio.jpg",
                        vec![w(Individualist, 2.0), w(Rebel, 0.5)],
                    ),
                    image_answer(
                        "q9a3",
                        "Laptop on a beach",
                        "images/q9/beach.jpg",
                        vec![w(Adventurer, 2.0)],
                    ),
                    image_answer(
                        "q9a4",
                        "Shared table in a busy office",
                        "images/q9/shared-table.jpg",
                        vec![w(Leader, 1.0), w(Caregiver, 1.0)],
                    ),
                ],
            },
        },
        slider(
            "q10",
            "How much do you rely on evidence before you act?",
            "Hardly at all",
            "Completely",
            vec![
                w(Intellectual, 0.4),
                w(Perfectionist, 0.2),
                w(Adventurer, -0.2),
            ],
        ),
    ]
}
