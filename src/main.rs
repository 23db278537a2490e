use std::path::PathBuf;

use clap::Parser;

use character_browser::config::{Config, ConfigError};
use character_browser::logging::init_tracing;
use character_browser::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "character-browser", version)]
#[command(about = "Browse, filter and inspect Rick and Morty characters")]
struct Args {
    /// Path to config file (default: ~/.config/character-browser/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Open the detail panel for this character id on start
    #[arg(long, value_name = "ID")]
    character: Option<u32>,
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env();
    config.override_base_url(args.base_url.as_deref());
    config.validate()?;
    Ok(config)
}

fn main() {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    init_tracing();

    if let Err(err) = runtime::run(config, args.character) {
        tracing::error!(error = %err, "character browser failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
