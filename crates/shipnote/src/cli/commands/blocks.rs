//! Blocks command

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use shipnote_changelog::{MessageContext, NotesGenerator};

use super::input::BodyArgs;
use crate::cli::{output, renderer, Cli, OutputFormat};

/// Render a chat block deployment message
#[derive(Debug, Args)]
pub struct BlocksCommand {
    #[command(flatten)]
    pub input: BodyArgs,

    /// Notification title (default: message.title from config)
    #[arg(long)]
    pub title: Option<String>,

    /// Promotion pull request title, used to fill the `repo` field
    #[arg(long, value_name = "TITLE")]
    pub promotion_title: Option<String>,

    /// Extra field as KEY=VALUE (repeatable, applied after --params)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub param: Vec<(String, String)>,

    /// Fields as a JSON object; single quotes are accepted in place of double quotes
    #[arg(long, value_name = "JSON")]
    pub params: Option<String>,
}

impl BlocksCommand {
    /// Execute the blocks command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            file = ?self.input.file,
            params = self.param.len(),
            has_promotion_title = self.promotion_title.is_some(),
            "executing blocks command"
        );
        let config = cli.load_config()?;
        let body = self.input.read(config.message.max_body_bytes)?;

        let mut ctx = MessageContext::new(self.input.deployed_at());
        if let Some(title) = &self.title {
            ctx = ctx.with_title(title.as_str());
        }
        if let Some(json) = &self.params {
            for (label, value) in parse_params(json)? {
                ctx.set_param(label, value);
            }
        }
        for (label, value) in &self.param {
            ctx.set_param(label.as_str(), value.as_str());
        }

        let renderer = renderer(&config, "blocks")?;
        let generator = NotesGenerator::new(config);

        if let Some(promotion_title) = &self.promotion_title {
            if generator
                .apply_promotion_title(&mut ctx, promotion_title)
                .is_none()
                && !cli.quiet
            {
                output::warning(&format!(
                    "No repository name in promotion title '{}'",
                    promotion_title
                ));
            }
        }

        let (report, message) = generator.generate_formatted(&body, renderer.as_ref(), &ctx);
        debug!(outcome = report.outcome.name(), "blocks rendered");

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({ "blocks": message });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("{}", serde_json::to_string_pretty(&message)?);
            }
        }

        Ok(())
    }
}

/// Parse `KEY=VALUE`
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.trim().is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Parse a JSON object of fields, keeping key order
fn parse_params(json: &str) -> anyhow::Result<Vec<(String, String)>> {
    let value: serde_json::Value =
        serde_json::from_str(&json.replace('\'', "\"")).context("Invalid --params JSON")?;
    let object = value
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("--params must be a JSON object"))?;

    Ok(object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("run_url=https://ci/1?a=b").unwrap(),
            ("run_url".to_string(), "https://ci/1?a=b".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_parse_params_keeps_order() {
        let params = parse_params("{'zeta': 'a', 'alpha': 2, 'ref': 'main'}").unwrap();
        assert_eq!(
            params,
            vec![
                ("zeta".to_string(), "a".to_string()),
                ("alpha".to_string(), "2".to_string()),
                ("ref".to_string(), "main".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_params_rejects_non_object() {
        assert!(parse_params("[1, 2]").is_err());
        assert!(parse_params("{broken").is_err());
    }

    #[test]
    fn test_blocks_args() {
        let cli = Cli::try_parse_from([
            "shipnote",
            "blocks",
            "-",
            "--title",
            "Deploy",
            "--promotion-title",
            "Promote web-app",
            "--param",
            "actor=juan",
            "--param",
            "ref=main",
            "--deployed-at",
            "2024-03-05T14:07:00Z",
        ])
        .unwrap();

        match cli.command {
            crate::cli::Commands::Blocks(cmd) => {
                assert_eq!(cmd.input.body.as_deref(), Some("-"));
                assert_eq!(cmd.title.as_deref(), Some("Deploy"));
                assert_eq!(cmd.param.len(), 2);
                assert!(cmd.input.deployed_at.is_some());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
