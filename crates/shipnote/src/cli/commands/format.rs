//! Format command

use clap::Args;
use tracing::info;

use shipnote_changelog::{MessageContext, NotesGenerator};

use super::input::BodyArgs;
use crate::cli::{output, renderer, Cli, OutputFormat};

/// Render a flat text deployment message
#[derive(Debug, Args)]
pub struct FormatCommand {
    #[command(flatten)]
    pub input: BodyArgs,
}

impl FormatCommand {
    /// Execute the format command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.input.file, "executing format command");
        let config = cli.load_config()?;
        let body = self.input.read(config.message.max_body_bytes)?;

        let renderer = renderer(&config, "flat")?;
        let generator = NotesGenerator::new(config);
        let ctx = MessageContext::new(self.input.deployed_at());
        let (report, message) = generator.generate_formatted(&body, renderer.as_ref(), &ctx);

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "outcome": report.outcome,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                print!("{}", message.as_text().unwrap_or_default());
                if !report.outcome.is_success() && cli.verbose && !cli.quiet {
                    output::warning(&report.outcome.status_line());
                }
            }
        }

        Ok(())
    }
}
