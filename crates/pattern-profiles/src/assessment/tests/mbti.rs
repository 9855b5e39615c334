use crate::assessment::domain::ProfileId;
use crate::assessment::mbti::{classify, weighted, MbtiError, MbtiProfile};

#[test]
fn intj_returns_intellectual_then_achiever() {
    let results = classify("INTJ").expect("INTJ is a canonical code");

    let summary: Vec<(ProfileId, u8)> = results
        .iter()
        .map(|result| (result.profile, result.percentage))
        .collect();
    assert_eq!(
        summary,
        vec![(ProfileId::Intellectual, 60), (ProfileId::Achiever, 25)]
    );
}

#[test]
fn excluded_profiles_remain_in_the_weighted_set() {
    let all = weighted("INTJ").expect("INTJ is a canonical code");
    assert!(all
        .iter()
        .any(|result| result.profile == ProfileId::Rebel && result.percentage == 10));
    assert!(all
        .iter()
        .any(|result| result.profile == ProfileId::Caregiver && result.percentage == 5));
    assert!(all.iter().all(|result| result.percentage > 0));
}

#[test]
fn unknown_code_fails_without_partial_results() {
    match classify("ZZZZ") {
        Err(MbtiError::NotFound { code }) => assert_eq!(code, "ZZZZ"),
        Ok(results) => panic!("expected not found, got {} results", results.len()),
    }
}

#[test]
fn every_code_yields_two_ranked_profiles() {
    for row in MbtiProfile::all() {
        let results = classify(row.code).expect("table codes classify");
        assert_eq!(results.len(), 2, "{} did not yield two profiles", row.code);
        assert!(results[0].percentage >= results[1].percentage);
        assert!(results
            .iter()
            .all(|result| result.narrative.summary.contains(row.code)));
    }
}
