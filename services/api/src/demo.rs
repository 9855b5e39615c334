use crate::infra::InMemorySessionStore;
use clap::Args;
use pattern_profiles::assessment::{
    mbti, top_n, AssessmentService, Intake, MbtiProfile, ProfileResult, QuestionCatalog,
    QuestionKind, QuizResponse, ScoringConfig, ScoringEngine, BREAKDOWN, SHORTLIST,
};
use pattern_profiles::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an array of responses, e.g. [{"question_id":"q1","answer_id":"q1a5"}]
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Number of ranked profiles to print
    #[arg(long, default_value_t = BREAKDOWN)]
    pub(crate) top: usize,
    /// Print the full result list as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct MbtiArgs {
    /// Canonical 4-letter code, uppercase (e.g. INFJ)
    pub(crate) code: String,
    /// Show every non-zero profile instead of the top two
    #[arg(long)]
    pub(crate) all: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// MBTI code used for the alternate classification step
    #[arg(long, default_value = "INTJ")]
    pub(crate) mbti_code: String,
    /// Skip the MBTI portion of the demo
    #[arg(long)]
    pub(crate) skip_mbti: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        responses,
        top,
        json,
    } = args;

    let raw = std::fs::read_to_string(&responses)?;
    let responses: Vec<QuizResponse> = serde_json::from_str(&raw)?;
    let results = ScoringEngine::default().score(&responses, QuestionCatalog::standard());

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Scored {} response(s)", responses.len());
        render_results(top_n(&results, top));
    }
    Ok(())
}

pub(crate) fn run_mbti(args: MbtiArgs) -> Result<(), AppError> {
    let row = MbtiProfile::lookup(&args.code)?;
    let results = if args.all {
        mbti::weighted(&args.code)?
    } else {
        mbti::classify(&args.code)?
    };

    println!("{} ({})", row.code, row.nickname);
    render_results(&results);
    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    catalog.validate()?;

    for question in catalog.questions() {
        println!("{} [{}] {}", question.id, question.kind.label(), question.text);
        match &question.kind {
            QuestionKind::Slider(scale) => println!(
                "    {} ({}) .. {} ({})",
                scale.min, scale.min_label, scale.max, scale.max_label
            ),
            kind => {
                for answer in kind.answers() {
                    println!("    {}: {}", answer.id, answer.text);
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        mbti_code,
        skip_mbti,
    } = args;

    println!("Profile assessment demo");
    let store = Arc::new(InMemorySessionStore::default());
    let service = AssessmentService::new(store.clone(), ScoringConfig::default());

    let intake = Intake {
        respondent_name: Some("Demo respondent".to_string()),
        age_range: Some("25-34".to_string()),
        focus_area: Some("work".to_string()),
    };
    let record = service.submit(intake, demo_responses())?;

    println!(
        "- Session {} recorded at {}",
        record.session_id,
        record.recorded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("- Dominant profiles: {}", record.summary());
    println!("- Breakdown:");
    render_results(top_n(&record.profile_results, BREAKDOWN));
    println!("- Sessions in store: {}", store.len());

    if skip_mbti {
        return Ok(());
    }

    println!("\nMBTI classification for {mbti_code}");
    let results = service.classify_mbti(&mbti_code)?;
    render_results(top_n(&results, SHORTLIST));
    if let Some(first) = results.first() {
        println!("  {}", first.narrative.summary);
    }

    Ok(())
}

fn demo_responses() -> Vec<QuizResponse> {
    vec![
        QuizResponse::single("q1", "q1a5"),
        QuizResponse::multiple("q2", &["q2a3", "q2a4"]),
        QuizResponse::slider("q3", 4.0),
        QuizResponse::single("q4", "q4a1"),
        QuizResponse::single("q5", "q5a2"),
        QuizResponse::slider("q6", 8.0),
        QuizResponse::multiple("q7", &["q7a1", "q7a6"]),
        QuizResponse::single("q8", "q8a4"),
        QuizResponse::single("q9", "q9a3"),
        QuizResponse::slider("q10", 5.0),
    ]
}

fn render_results(results: &[ProfileResult]) {
    for (rank, result) in results.iter().enumerate() {
        println!(
            "  {}. {:<18} {:>3}%  (score {:.2})",
            rank + 1,
            result.name,
            result.percentage,
            result.score
        );
    }
}
