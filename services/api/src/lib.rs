mod cli;
mod disc;
mod infra;
mod routes;
mod server;

use dental_leads::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
