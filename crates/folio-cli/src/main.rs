use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{AppConfig, ThemeMode};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A personal portfolio that lives in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/folio/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio (default)
    Run {
        /// Skip the animated hero scene and draw the static illustration
        #[arg(long)]
        no_scene: bool,
        /// Start in this theme instead of the saved one
        #[arg(long)]
        theme: Option<ThemeMode>,
    },
    /// Print the portfolio content to stdout
    Print {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Set the saved theme
    Theme {
        #[arg(value_enum)]
        mode: ThemeChoice,
    },
    /// Show or create the config file
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
        /// Print the config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    init_logging(&config)?;

    let command = cli.command.unwrap_or(Commands::Run {
        no_scene: false,
        theme: None,
    });

    match command {
        Commands::Run { no_scene, theme } => commands::run::run(config, no_scene, theme).await,
        Commands::Print { json } => commands::print::run(json),
        Commands::Theme { mode } => commands::theme::run(&config, mode),
        Commands::Config { init, path } => commands::config::run(&config, &config_path, init, path),
    }
}

/// Log to `<data_dir>/folio.log`; stdout belongs to the TUI
fn init_logging(config: &AppConfig) -> Result<()> {
    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .context("Failed to open log file")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(false),
        )
        .init();
    Ok(())
}
