//! Jot CLI - keep short notes from the command line
//!
//! Quick capture from the terminal with minimal friction.

mod cli;
mod commands;
mod error;

use clap::Parser;

use cli::{CacheCommands, Cli, Commands};
use commands::add::run_add;
use commands::cache::{run_cache_activate, run_cache_install, run_cache_status};
use commands::completions::run_completions;
use commands::delete::run_delete;
use commands::list::run_list;
use error::CliError;

const DEFAULT_LIST_LIMIT: usize = 10;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let notes_path = cli.notes_path.as_deref();

    match cli.command {
        Some(Commands::Add { content }) => run_add(&content, notes_path),
        Some(Commands::List { limit, json }) => run_list(limit, json, notes_path),
        Some(Commands::Delete { id }) => run_delete(&id, notes_path),
        Some(Commands::Cache { command }) => match command {
            CacheCommands::Install => run_cache_install().await,
            CacheCommands::Activate => run_cache_activate().await,
            CacheCommands::Status { json } => run_cache_status(json).await,
        },
        Some(Commands::Completions { shell, output }) => run_completions(shell, output),
        // Quick capture: `jot "my note here"`
        None if !cli.note.is_empty() => run_add(&cli.note, notes_path),
        None => run_list(DEFAULT_LIST_LIMIT, false, notes_path),
    }
}
