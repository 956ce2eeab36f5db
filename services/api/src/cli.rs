use crate::commands::{run_emi, run_search, EmiArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use realty::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Realty Listings Service",
    about = "Serve and query the property catalogue from the command line",
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
    /// Search the sample catalogue (plus an optional CSV import) and print matches
    Search(SearchArgs),
    /// Print the EMI breakdown for a home loan
    Emi(EmiArgs),
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
        Command::Search(args) => run_search(args),
        Command::Emi(args) => run_emi(args),
    }
}
