use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tidyvox::{Catalog, CommandResolver};

mod cli;

#[derive(Parser)]
#[command(name = "tidyvox")]
#[command(about = "Voice command recognition for the tidy-up assistant")]
#[command(version)]
struct Cli {
    /// Path to a catalog overlay file (TOML); merged over the built-ins
    #[arg(short = 'C', long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every command in the catalog with its patterns
    Commands,

    /// Resolve a single utterance and print the matched command
    Resolve {
        /// The utterance, as words or a quoted string
        #[arg(required = true)]
        utterance: Vec<String>,

        /// Print the full match as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest commands for a partial or unclear utterance
    Suggest {
        /// The partial utterance
        #[arg(required = true)]
        partial: Vec<String>,

        /// Maximum number of suggestions
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },

    /// Read transcripts from stdin and resolve them continuously
    Listen {
        /// Path to a driver config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin(),
    };
    let resolver = CommandResolver::new(catalog);

    match cli.command {
        Commands::Commands => {
            cli::catalog::catalog_command(resolver.catalog());
        }
        Commands::Resolve { utterance, json } => {
            cli::resolve::resolve_command(&resolver, &utterance.join(" "), json)?;
        }
        Commands::Suggest { partial, limit } => {
            cli::suggest::suggest_command(&resolver, &partial.join(" "), limit);
        }
        Commands::Listen { config } => {
            cli::listen::listen_command(resolver, config.as_deref()).await?;
        }
    }

    Ok(())
}
