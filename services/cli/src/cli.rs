use clap::{Parser, Subcommand};
use promo_pricer::error::AppError;

use crate::commands::{run_batch, run_explain, ExplainArgs, RunArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Promo Pricer",
    about = "Price retail sales feeds with the standard promotional discount rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price every row of a sales feed and write the settled records
    Run(RunArgs),
    /// Price one ad-hoc sale and show each rule's contribution
    Explain(ExplainArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run_batch(args),
        Command::Explain(args) => run_explain(args),
    }
}
