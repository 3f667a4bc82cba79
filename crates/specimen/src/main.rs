//! Specimen CLI - example generation for component libraries.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::ConfigFile;

#[derive(Parser)]
#[command(name = "specimen")]
#[command(about = "Generate, inspect and preview component examples from a registry")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to specimen.toml config file
    #[arg(short, long, default_value = "specimen.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and registry in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// List registered components
    List,

    /// Show resolved metadata and diagnostics for a component
    Inspect {
        /// Component name
        name: String,
    },

    /// Print the synthesized example, failing on errors
    Generate {
        /// Component name
        name: String,
    },

    /// Print the display-ready example (never fails)
    Render {
        /// Component name
        name: String,
    },

    /// Render examples for every component into a directory
    Export {
        /// Output directory (defaults to config or "dist/examples")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only export these components
        components: Vec<String>,
    },

    /// Start the preview server with registry hot reload
    Serve {
        /// Port to listen on (defaults to config or 7777)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
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

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Everything except init needs the config file
    let load_config = || ConfigFile::load(&cli.config);

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::List => {
            commands::list::run(&load_config()?).await?;
        }
        Commands::Inspect { name } => {
            commands::inspect::run(&load_config()?, &name).await?;
        }
        Commands::Generate { name } => {
            commands::generate::run(&load_config()?, &name).await?;
        }
        Commands::Render { name } => {
            commands::render::run(&load_config()?, &name).await?;
        }
        Commands::Export { output, components } => {
            commands::export::run(&load_config()?, output, components).await?;
        }
        Commands::Serve { port, no_open } => {
            commands::serve::run(&load_config()?, port, !no_open).await?;
        }
    }

    Ok(())
}
