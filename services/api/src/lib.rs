mod cli;
mod infra;
mod quiz;
mod routes;
mod server;
mod tools;

use launchwise::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
