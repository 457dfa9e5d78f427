use crate::demo::{run_demo, run_jobs_import, DemoArgs, JobsImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use jobportal::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Job Portal",
    about = "Run and demo the job board service from the command line",
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
    /// Work with listing CSV exports
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Run an end-to-end CLI demo covering the session, listing, and dashboard flows
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Validate a listings CSV export and print the rows it would add
    Import(JobsImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Hydrate the job catalog from a listings CSV export on top of the seed data
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Jobs {
            command: JobsCommand::Import(args),
        } => run_jobs_import(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
