mod app;
mod commands;
mod error;
mod part;
mod session;

use app::{App as CLI, Commands, LogLevel};
use clap::Parser;
use session::PartSession;
use std::env;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn create_filter(level: LogLevel) -> EnvFilter {
    let level = LevelFilter::from(level);

    EnvFilter::new(format!(
        "partkit_cli={level},partkit_go={level},system_env={level}"
    ))
}

fn setup_tracing(cli: &CLI) {
    let filter = match &cli.log {
        Some(level) => create_filter(*level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| create_filter(LogLevel::default())),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = CLI::parse();

    setup_tracing(&cli);

    debug!(
        args = ?env::args().collect::<Vec<_>>(),
        "Running partkit v{}",
        env!("CARGO_PKG_VERSION")
    );

    let session = PartSession::new(&cli)?;

    match &cli.command {
        Commands::Build => commands::build(&session),
        Commands::Clean(args) => commands::clean(&session, args),
        Commands::Env => commands::env(&session),
        Commands::Pull => commands::pull(&session),
        Commands::Schema => commands::schema(),
    }
}
