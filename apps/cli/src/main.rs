mod commands;
mod env;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "clipfarm", about = "Highlight clips and captions from timed transcripts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a language model for highlights and print them as JSON clips.
    Highlights(commands::highlights::Args),
    /// Render the transcript as SRT captions.
    Captions(commands::captions::Args),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env = env::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Highlights(args) => commands::highlights::run(args, env).await,
        Command::Captions(args) => commands::captions::run(args),
    }
}
