use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use fantasy_wrapped::cli::args::{Cli, Commands};
use fantasy_wrapped::cli::handlers;
use fantasy_wrapped::config::AppConfig;
use fantasy_wrapped::session::HttpStatSource;
use fantasy_wrapped::tui;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }
    log::debug!("backend at {}", config.backend.base_url);

    match cli.command {
        Some(Commands::Print(args)) => handlers::handle_print(&args, &config)?,
        Some(Commands::Config { init }) => handlers::handle_config(&config, init)?,

        // No subcommand → launch TUI
        None => {
            let source = HttpStatSource::new(&config.backend)?;
            tui::app::run(config, Arc::new(source))?;
        }
    }

    Ok(())
}
