use crate::demo::{run_demo, run_questions, DemoArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use interview_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Interview Practice Service",
    about = "Demonstrate and run the interview practice service from the command line",
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
    /// Draw a question set for a role without starting a session
    Questions(QuestionsArgs),
    /// Run an end-to-end CLI demo covering a full practice session
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
        Command::Questions(args) => run_questions(args),
        Command::Demo(args) => run_demo(args),
    }
}
