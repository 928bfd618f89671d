// ABOUTME: Main application entry point.
// ABOUTME: Loads config, sets up logging and runs the command loop over stdin or a script.

mod app;
mod args;
mod commands;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use ps_core::Config;
use tracing_subscriber::EnvFilter;

use app::App;
use args::Args;

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        // --save-config may be creating the file
        Some(path) if args.save_config && !path.exists() => Config::default(),
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_or_default(),
    };
    args.apply(&mut config);
    Ok(config)
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_logging(&config.log_level);

    tracing::info!("Starting pane-splitter");
    tracing::info!(
        "Loaded config: resplit={}, max_depth={:?}, view={}x{} {}",
        config.layout.resplit.label(),
        config.layout.max_depth,
        config.view.cols,
        config.view.rows,
        config.view.format.label()
    );

    if args.save_config {
        let path = args.persist(&config).context("Failed to save config")?;
        tracing::info!("Saved config to {}", path.display());
        return Ok(());
    }

    let mut app = App::new(config, args.echo);
    let mut stdout = io::stdout().lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            app.run(BufReader::new(file), &mut stdout)?;
        }
        None => app.run(io::stdin().lock(), &mut stdout)?,
    }

    tracing::info!("Finished with {} panes", app.editor().tree().pane_count());
    Ok(())
}
