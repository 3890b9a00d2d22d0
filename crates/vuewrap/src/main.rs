//! vuewrap CLI - generate Vue wrapper components for custom elements.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "vuewrap")]
#[command(about = "Generate Vue wrapper components for custom elements")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to vuewrap.toml config file
    #[arg(short, long, default_value = "vuewrap.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default vuewrap.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate wrapper components
    Build {
        /// Output directory (defaults to config or "src/components")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not write index.ts
        #[arg(long)]
        no_index: bool,
    },

    /// Regenerate wrappers whenever the manifest changes
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build { output, no_index } => {
            let index = if no_index { Some(false) } else { None };
            commands::build::run(&cli.config, output, index)?;
        }
        Commands::Watch => {
            commands::watch::run(&cli.config).await?;
        }
    }

    Ok(())
}
