use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod id_store;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "postman", version, about = "Postman API command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Workspaces { action, output } => {
            cmd::workspaces::workspaces_cmd(action, output).await
        }
        Command::Collections { action, output } => {
            cmd::collections::collections_cmd(action, output).await
        }
        Command::Specs { action, output } => cmd::specs::specs_cmd(action, output).await,
        Command::Generate { action, output } => cmd::generate::generate_cmd(action, output).await,
        Command::Whoami { output } => cmd::whoami::whoami_cmd(output).await,
    }
}
