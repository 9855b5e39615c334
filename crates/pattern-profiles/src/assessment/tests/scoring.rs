use super::common::*;
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{
    ProfileId, ProfileWeight, Question, QuestionKind, QuizResponse, SliderScale,
};
use crate::assessment::scoring::{score, ScoringConfig, ScoringEngine, SliderNormalization};

#[test]
fn empty_responses_still_return_every_profile() {
    let results = score(&[], QuestionCatalog::standard());

    assert_eq!(results.len(), ProfileId::COUNT);
    assert!(results.iter().all(|result| result.score == 0.0));
    assert!(results.iter().all(|result| result.percentage == 0));
    let order: Vec<ProfileId> = results.iter().map(|result| result.profile).collect();
    assert_eq!(order, ProfileId::ordered().to_vec());
}

#[test]
fn single_select_answer_adds_weights_verbatim() {
    let results = score(&[QuizResponse::single("q1", "q1a5")], QuestionCatalog::standard());

    assert!(approx_eq(score_of(&results, ProfileId::Achiever), 3.0));
    assert!(approx_eq(score_of(&results, ProfileId::Leader), 1.0));
    assert_eq!(percentage_of(&results, ProfileId::Achiever), 75);
    assert_eq!(percentage_of(&results, ProfileId::Leader), 25);
    assert_eq!(results[0].profile, ProfileId::Achiever);
    assert_eq!(results[1].profile, ProfileId::Leader);
    assert!(results[2..].iter().all(|result| result.percentage == 0));
}

#[test]
fn slider_uses_fixed_divisor_and_scale() {
    let results = score(&[QuizResponse::slider("q3", 10.0)], QuestionCatalog::standard());

    assert!(approx_eq(score_of(&results, ProfileId::Caregiver), 3.0));
    assert!(approx_eq(score_of(&results, ProfileId::Peacemaker), 3.0));
    assert!(approx_eq(score_of(&results, ProfileId::Rebel), -2.0));
    assert!(approx_eq(score_of(&results, ProfileId::Leader), -2.0));
    assert_eq!(percentage_of(&results, ProfileId::Caregiver), 50);
    assert_eq!(percentage_of(&results, ProfileId::Peacemaker), 50);
    assert_eq!(percentage_of(&results, ProfileId::Rebel), 0);
    assert_eq!(percentage_of(&results, ProfileId::Leader), 0);
}

#[test]
fn negative_scores_rank_below_zero_scores() {
    let results = score(&[QuizResponse::slider("q3", 10.0)], QuestionCatalog::standard());

    let order: Vec<ProfileId> = results.iter().map(|result| result.profile).collect();
    assert_eq!(
        order,
        vec![
            ProfileId::Caregiver,
            ProfileId::Peacemaker,
            ProfileId::Achiever,
            ProfileId::Intellectual,
            ProfileId::Perfectionist,
            ProfileId::Adventurer,
            ProfileId::Individualist,
            ProfileId::Rebel,
            ProfileId::Leader,
        ]
    );
}

#[test]
fn slider_values_outside_the_range_are_not_clamped() {
    let results = score(&[QuizResponse::slider("q3", 20.0)], QuestionCatalog::standard());
    assert!(approx_eq(score_of(&results, ProfileId::Caregiver), 6.0));
    assert!(approx_eq(score_of(&results, ProfileId::Rebel), -4.0));
}

#[test]
fn multi_select_adds_every_selected_answer_in_full() {
    let results = score(
        &[QuizResponse::multiple("q2", &["q2a1", "q2a4"])],
        QuestionCatalog::standard(),
    );

    assert!(approx_eq(score_of(&results, ProfileId::Intellectual), 2.0));
    assert!(approx_eq(score_of(&results, ProfileId::Individualist), 2.0));
    assert!(approx_eq(score_of(&results, ProfileId::Achiever), 0.5));
    assert_eq!(percentage_of(&results, ProfileId::Intellectual), 44);
    assert_eq!(percentage_of(&results, ProfileId::Individualist), 44);
    assert_eq!(percentage_of(&results, ProfileId::Achiever), 11);
}

#[test]
fn image_select_scores_like_single_select() {
    let results = score(&[QuizResponse::single("q4", "q4a3")], QuestionCatalog::standard());
    assert!(approx_eq(score_of(&results, ProfileId::Rebel), 2.0));
    assert!(approx_eq(score_of(&results, ProfileId::Individualist), 1.0));
    assert_eq!(results[0].profile, ProfileId::Rebel);
}

#[test]
fn unknown_questions_and_answers_contribute_nothing() {
    let responses = vec![
        QuizResponse::single("q99", "q99a1"),
        QuizResponse::single("q1", "q1a99"),
        QuizResponse::multiple("q2", &["q2a3", "missing"]),
    ];
    let results = score(&responses, QuestionCatalog::standard());

    assert!(approx_eq(score_of(&results, ProfileId::Adventurer), 2.0));
    assert_eq!(percentage_of(&results, ProfileId::Adventurer), 100);
    let others: f64 = results
        .iter()
        .filter(|result| result.profile != ProfileId::Adventurer)
        .map(|result| result.score.abs())
        .sum();
    assert_eq!(others, 0.0);
}

#[test]
fn responses_that_do_not_match_the_question_kind_are_ignored() {
    let responses = vec![
        QuizResponse::slider("q1", 10.0),
        QuizResponse::single("q2", "q2a1"),
        QuizResponse::multiple("q3", &["q3a1"]),
    ];
    let results = score(&responses, QuestionCatalog::standard());
    assert!(results.iter().all(|result| result.score == 0.0));
    assert!(results.iter().all(|result| result.percentage == 0));
}

#[test]
fn duplicate_responses_are_each_counted() {
    let responses = vec![
        QuizResponse::single("q1", "q1a5"),
        QuizResponse::single("q1", "q1a5"),
    ];
    let results = score(&responses, QuestionCatalog::standard());
    assert!(approx_eq(score_of(&results, ProfileId::Achiever), 6.0));
    assert!(approx_eq(score_of(&results, ProfileId::Leader), 2.0));
}

#[test]
fn rescoring_a_corrected_list_reflects_only_the_new_answer() {
    let first = score(&[QuizResponse::single("q1", "q1a1")], QuestionCatalog::standard());
    assert_eq!(first[0].profile, ProfileId::Caregiver);

    let corrected = score(&[QuizResponse::single("q1", "q1a5")], QuestionCatalog::standard());
    assert!(approx_eq(score_of(&corrected, ProfileId::Caregiver), 0.0));
    assert!(approx_eq(score_of(&corrected, ProfileId::Peacemaker), 0.0));
    assert!(approx_eq(score_of(&corrected, ProfileId::Achiever), 3.0));
}

#[test]
fn scoring_is_idempotent() {
    let responses = full_questionnaire();
    let first = score(&responses, QuestionCatalog::standard());
    let second = score(&responses, QuestionCatalog::standard());
    assert_eq!(first, second);
}

#[test]
fn percentages_sum_to_one_hundred_within_rounding() {
    let results = score(&full_questionnaire(), QuestionCatalog::standard());

    let nonzero = results.iter().filter(|result| result.score > 0.0).count() as i32;
    let sum: i32 = results.iter().map(|result| result.percentage as i32).sum();
    assert!(nonzero > 0);
    assert!((sum - 100).abs() <= nonzero, "sum was {sum}");
    assert_eq!(results.len(), ProfileId::COUNT);
    assert!(results
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

fn wide_slider_catalog() -> QuestionCatalog {
    QuestionCatalog::from_questions(vec![Question {
        id: "energy".into(),
        text: "Energy level".to_string(),
        kind: QuestionKind::Slider(SliderScale {
            min: 0.0,
            max: 100.0,
            min_label: "Drained".to_string(),
            max_label: "Buzzing".to_string(),
            weights: vec![ProfileWeight::new(ProfileId::Adventurer, 0.5)],
        }),
    }])
    .expect("catalog is valid")
}

#[test]
fn fixed_divisor_overshoots_on_wider_sliders() {
    let catalog = wide_slider_catalog();
    let results = score(&[QuizResponse::slider("energy", 50.0)], &catalog);
    // 50 / 10 * 0.5 * 10
    assert!(approx_eq(score_of(&results, ProfileId::Adventurer), 25.0));
}

#[test]
fn catalog_range_normalization_is_opt_in() {
    let catalog = wide_slider_catalog();
    let engine = ScoringEngine::new(ScoringConfig {
        slider_normalization: SliderNormalization::CatalogRange,
        ..ScoringConfig::default()
    });
    let results = engine.score(&[QuizResponse::slider("energy", 50.0)], &catalog);
    assert!(approx_eq(score_of(&results, ProfileId::Adventurer), 2.5));
    assert_eq!(percentage_of(&results, ProfileId::Adventurer), 100);
}

#[test]
fn results_carry_registry_metadata() {
    let results = score(&[QuizResponse::single("q5", "q5a1")], QuestionCatalog::standard());
    let top = &results[0];
    assert_eq!(top.profile, ProfileId::Peacemaker);
    assert_eq!(top.name, "The Peacemaker");
    assert!(!top.narrative.summary.is_empty());
    assert!(!top.resources.is_empty());
}
