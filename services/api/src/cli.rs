use bench_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_roster_classify, DemoArgs, RosterClassifyArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Prescriptive Shift Board",
    about = "Run and demonstrate the prescriptive shift board from the command line",
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
    /// Classify roster snapshots from time-on-ice telemetry
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Run an end-to-end CLI demo over the bundled sample snapshot
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Classify a TOI report export and print the ranked views
    Classify(RosterClassifyArgs),
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
        Command::Roster {
            command: RosterCommand::Classify(args),
        } => run_roster_classify(args),
        Command::Demo(args) => run_demo(args),
    }
}
