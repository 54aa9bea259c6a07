//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use shipnote_core::config::defaults::{
    DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
};
use shipnote_core::Config;

use crate::cli::{output, Cli};

/// Write a default configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write TOML without asking for a format
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;

        let format = if self.toml || self.yes {
            ConfigFormat::Toml
        } else {
            let formats = ["toml", "yaml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            if selection == 0 {
                ConfigFormat::Toml
            } else {
                ConfigFormat::Yaml
            }
        };

        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| default_path(&cwd, format));

        // Check if config already exists
        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        std::fs::write(&config_path, render_config(format)?)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to match your pull request template", config_path.display());
            println!(
                "  2. Run {} to try it on a body",
                style("shipnote check --file body.md").cyan()
            );
        }

        Ok(())
    }
}

fn default_path(dir: &Path, format: ConfigFormat) -> PathBuf {
    match format {
        ConfigFormat::Toml => dir.join(DEFAULT_CONFIG_TOML),
        ConfigFormat::Yaml => dir.join(DEFAULT_CONFIG_YAML),
    }
}

fn render_config(format: ConfigFormat) -> anyhow::Result<String> {
    Ok(match format {
        ConfigFormat::Toml => DEFAULT_CONFIG_TEMPLATE.to_string(),
        ConfigFormat::Yaml => serde_yaml::to_string(&Config::default())?,
    })
}
