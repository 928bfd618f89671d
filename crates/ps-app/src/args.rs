// ABOUTME: Command line flags for the pane-splitter binary.
// ABOUTME: Values given here override the config file.

use std::path::PathBuf;

use clap::Parser;
use ps_core::{Config, ConfigError, ResplitPolicy, ViewFormat};

#[derive(Parser, Debug, Default)]
#[command(
    name = "pane-splitter",
    version,
    about = "Split a region into nested panes, remove them and swap siblings",
    long_about = "Reads editing commands (split, remove, drag, over, leave, drop, cancel, reset, show) \
                  one per line from stdin or a script file and prints the resulting pane layout."
)]
pub struct Args {
    /// Config file to use instead of ~/.config/pane-splitter/config.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Grid width in characters
    #[arg(long)]
    pub cols: Option<usize>,

    /// Grid height in characters
    #[arg(long)]
    pub rows: Option<usize>,

    /// Default view format (grid, outline or json)
    #[arg(short, long)]
    pub format: Option<ViewFormat>,

    /// Behavior when splitting an already-split pane (guard or replace)
    #[arg(long)]
    pub resplit: Option<ResplitPolicy>,

    /// Print the layout after every change
    #[arg(long, default_value_t = false)]
    pub echo: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long, default_value_t = false)]
    pub save_config: bool,
}

impl Args {
    /// Apply flag overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(cols) = self.cols {
            config.view.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.view.rows = rows;
        }
        if let Some(format) = self.format {
            config.view.format = format;
        }
        if let Some(resplit) = self.resplit {
            config.layout.resplit = resplit;
        }
    }

    /// Save a config to the --config path, or the default location when none was given
    pub fn persist(&self, config: &Config) -> Result<PathBuf, ConfigError> {
        match &self.config {
            Some(path) => {
                config.save(path)?;
                Ok(path.clone())
            }
            None => config.save_to_default(),
        }
    }
}
