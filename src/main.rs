//! Course enrollment backend - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_enrollment::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    AppResult,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        if e.is_client_error() {
            tracing::warn!(code = e.code(), "Command failed: {}", e);
        } else {
            tracing::error!(code = e.code(), "Command failed: {}", e);
        }
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> AppResult<()> {
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded");

    match command {
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::Catalog(args) => commands::catalog::execute(args, config).await,
        Commands::Users(args) => commands::users::execute(args, config).await,
        Commands::Login(args) => commands::login::execute(args, config).await,
        Commands::Token(args) => commands::token::execute(args, config).await,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
