mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use crew_rotation::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
