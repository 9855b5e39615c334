use crate::demo::{
    run_catalog, run_demo, run_mbti, run_score, DemoArgs, MbtiArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pattern_profiles::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Pattern Profiles",
    about = "Score behavioral profile questionnaires and classify MBTI codes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a JSON file of questionnaire responses
    Score(ScoreArgs),
    /// Map a 16-type MBTI code onto the profile space
    Mbti(MbtiArgs),
    /// Print the built-in question catalog
    Catalog,
    /// Run a sample questionnaire and MBTI classification end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Mbti(args) => run_mbti(args),
        Command::Catalog => run_catalog(),
        Command::Demo(args) => run_demo(args),
    }
}
