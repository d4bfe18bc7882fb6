mod commands;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::host::{CliHost, Host};
use crate::sync::SyncManager;

#[derive(Parser)]
#[command(name = "instrsync")]
#[command(author, version, about = "Sync AI Assistant custom instructions", long_about = None)]
pub struct Cli {
    /// Project root containing .idea/workspace.xml
    #[arg(long, global = true, default_value = ".")]
    pub project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export instructions from workspace.xml to the .ai directory
    Export {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Import instruction files from the .ai directory into workspace.xml
    Import {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Run the silent import performed when a project is opened
    Open,
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "instrsync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let host = CliHost;
    let manager = SyncManager::new(host);

    match cli.command {
        Commands::Export { format } => {
            let output = commands::sync::export(&manager, &cli.project, &format)?;
            host.show_message(&output);
        }
        Commands::Import { format } => {
            let output = commands::sync::import(&manager, &cli.project, &format)?;
            host.show_message(&output);
        }
        Commands::Open => manager.import_on_open(&cli.project),
    }

    Ok(())
}
