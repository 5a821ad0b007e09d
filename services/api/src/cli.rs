use crate::server;
use crate::tools::{run_evaluate, run_interactive, run_list, EvaluateArgs, RunArgs};
use clap::{Args, Parser, Subcommand};
use launchwise::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Launchwise",
    about = "Serve the Launchwise site API or run its self-assessment tools from the terminal",
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
    /// List, take, or score the self-assessment tools
    Tools {
        #[command(subcommand)]
        command: ToolsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ToolsCommand {
    /// Print every available tool
    List,
    /// Answer a tool's questions interactively
    Run(RunArgs),
    /// Score a saved answers file
    Evaluate(EvaluateArgs),
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
        Command::Tools { command } => match command {
            ToolsCommand::List => run_list(),
            ToolsCommand::Run(args) => run_interactive(args),
            ToolsCommand::Evaluate(args) => run_evaluate(args),
        },
    }
}
