//! Lumen CLI
//!
//! Host-side driver for the Lumen notification bridge: loads a client state
//! file, runs producers and prints the delivered events.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lumen_bridge::BridgeConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version, about = "Lumen: credential client notification bridge", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Client state file (JSON)
    #[arg(short, long, global = true, env = "LUMEN_STATE_PATH")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a producer and print delivered events as JSON lines
    Notify {
        /// Which notification to emit
        #[arg(value_enum)]
        kind: NotificationKind,
    },

    /// Print the projected configuration snapshot
    Project,

    /// Show a summary of the client state
    Status,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum NotificationKind {
    /// Configuration snapshot followed by the credential list
    Configuration,
    /// Configuration snapshot only
    ConfigurationOnly,
    Credentials,
    Enrollment,
    Preferences,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries events
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("lumen={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = BridgeConfig::from_env();
    if let Some(state) = cli.state {
        config.state_path = Some(state);
    }

    match cli.command {
        Commands::Notify { kind } => commands::notify::run(&config, kind)?,
        Commands::Project => commands::project::run(&config)?,
        Commands::Status => commands::status::show(&config)?,
    }

    Ok(())
}
