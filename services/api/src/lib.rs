mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use pattern_profiles::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
