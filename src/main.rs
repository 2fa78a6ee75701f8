use crate::config::{Config, RenderMode};
use clap::Parser;
use eyre::Result;
use std::path::{Path, PathBuf};
use tracing::Level;

mod config;
mod histogram;
mod loaders;
mod model;
mod shell;
mod stats;

#[derive(Debug, Parser)]
#[command(version, about = "Compute student grades and assignment statistics from flat files")]
struct Options {
    /// Use FILE instead of gradebook.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read data files from DIR instead of the configured directory
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Open the rendered histogram in the platform image viewer
    #[arg(long)]
    show: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

const DEFAULT_CONFIG_FILE: &str = "gradebook.toml";

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    let mut config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        // The default configuration file is optional.
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => Config::default(),
    };
    if let Some(dir) = options.data_dir {
        config.data.dir = dir;
    }
    if options.show {
        config.render.mode = RenderMode::Window;
    }
    let book = loaders::load_gradebook(&config.data)?;
    shell::run(&book, &config.render)
}
