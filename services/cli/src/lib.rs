mod cli;
mod commands;
mod infra;

use promo_pricer::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
