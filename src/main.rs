//! Naflix CLI
//!
//! Browse movie and TV catalogs from TMDB in the terminal.

use std::sync::Arc;

use clap::Parser;
use naflix::cli::{
    args::{Cli, Commands},
    commands::{detail, home},
};
use naflix::models::config::{self, Config, FetchStrategy};
use naflix::preflight;
use naflix::services::TmdbClient;

// Rendering and fetch completions share one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks(&config).await?;
    }

    let api = Arc::new(TmdbClient::new(config.tmdb.clone())?);

    match cli.command {
        Commands::Home { parallel, format } => {
            let strategy = if parallel {
                FetchStrategy::Parallel
            } else {
                config.home.strategy
            };
            home::show_home(api, strategy, format).await?;
        }

        Commands::Detail { route, format } => {
            detail::show_detail(api, &config.tmdb, &route, format).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("naflix=debug")
    } else {
        EnvFilter::new("naflix=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    let results = preflight::run_preflight_checks(config).await;

    if !preflight::all_passed(&results) {
        preflight::print_results(&results);
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    tracing::debug!("Preflight checks passed");
    Ok(())
}
