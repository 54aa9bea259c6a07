//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use shipnote_changelog::{MessageRenderer, RendererRegistry};
use shipnote_core::config::{load_config, load_config_or_default, validation::validate_config};
use shipnote_core::{Config, ShipnoteError};

use crate::exit_codes;
use commands::{BlocksCommand, CheckCommand, FormatCommand, InitCommand};

/// Shipnote - deployment notes from promotion pull request bodies
#[derive(Debug, Parser)]
#[command(name = "shipnote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (default: search from the working directory upward)
    #[arg(long, global = true, env = "SHIPNOTE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a flat text deployment message
    Format(FormatCommand),

    /// Render a chat block deployment message
    Blocks(BlocksCommand),

    /// Check a body and report its outcome
    Check(CheckCommand),

    /// Write a default configuration file
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        let result = match self.command {
            Commands::Format(ref cmd) => cmd.execute(&self),
            Commands::Blocks(ref cmd) => cmd.execute(&self),
            Commands::Check(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
        };

        if let Err(err) = &result {
            if let Some(code) = exit_code_for(err) {
                output::error(&format!("{:#}", err));
                std::process::exit(code);
            }
        }

        result
    }

    /// Load and validate the configuration selected by `--config` or the working directory
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                let (config, path) = load_config_or_default(&cwd);
                if self.verbose && !self.quiet {
                    match path {
                        Some(path) => output::info(&format!(
                            "Using config {}",
                            output::path_style().apply_to(path.display())
                        )),
                        None => output::info("No config file found, using defaults"),
                    }
                }
                config
            }
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Look up a renderer by name, built from the message configuration
pub fn renderer(config: &Config, name: &str) -> anyhow::Result<Arc<dyn MessageRenderer>> {
    let registry = RendererRegistry::new(&config.message);
    registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown renderer '{}'. Available: {}",
            name,
            registry.names().join(", ")
        )
    })
}

/// Dedicated exit code for errors the user can fix
fn exit_code_for(err: &anyhow::Error) -> Option<i32> {
    match err.downcast_ref::<ShipnoteError>()? {
        ShipnoteError::Config(_) => Some(exit_codes::CONFIG_ERROR),
        ShipnoteError::InputTooLarge { .. } => Some(exit_codes::INPUT_ERROR),
        _ => None,
    }
}
