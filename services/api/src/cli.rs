use crate::disc::{run_disc_score, DiscScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dental_leads::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dental Leads Backend",
    about = "Run the dental clinic lead intake service or score DISC questionnaires offline",
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
    /// Work with DISC questionnaire answers
    Disc {
        #[command(subcommand)]
        command: DiscCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DiscCommand {
    /// Score answers and print the resulting profile as JSON
    Score(DiscScoreArgs),
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
        Command::Disc {
            command: DiscCommand::Score(args),
        } => run_disc_score(args),
    }
}
