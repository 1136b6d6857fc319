pub mod animation;
pub mod app;
pub mod args;
pub mod config;
pub mod controls;
pub mod error;
pub mod files;
pub mod grid;
pub mod registry;
pub mod render;
pub mod state;
pub mod wave;

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
pub use color_eyre::eyre::Error;
use color_eyre::eyre::bail;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn main() -> Result<(), Error> {
    let _ = dotenv();
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .pretty()
        .init();

    let args = Args::parse();
    match args.command.unwrap_or_default() {
        Command::Main(args) => app::run_app(args)?,
        Command::DumpDefaultConfig { output, format } => {
            let config = AppConfig::default();
            let config = match format.as_str() {
                "toml" => toml::to_string_pretty(&config)?,
                "json" => serde_json::to_string_pretty(&config)?,
                _ => bail!("Invalid format: {format}"),
            };
            if let Some(output) = &output {
                std::fs::write(output, &config)?;
            }
            else {
                println!("{config}");
            }
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[clap(version, about = "Compose and animate superposed wave packets")]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the wave packet window (default).
    Main(args::Args),
    /// Print or write the default config file.
    DumpDefaultConfig {
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(short, long, default_value = "toml")]
        format: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Main(Default::default())
    }
}
