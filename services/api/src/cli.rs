use crate::commands::{run_catalog, run_draft, run_match, CatalogArgs, DraftArgs, MatchArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use support_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Support Match",
    about = "Match disability self-assessments to assistance programs, funding, and jobs",
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
    /// Match a profile JSON file against the resource catalog
    Match(MatchArgs),
    /// Generate a draft application letter for one matched resource
    Draft(DraftArgs),
    /// List the resource catalog
    Catalog(CatalogArgs),
    /// Walk a sample profile through intake, matching, and drafting
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
        Command::Match(args) => run_match(args).await,
        Command::Draft(args) => run_draft(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
