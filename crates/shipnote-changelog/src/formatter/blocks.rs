//! Chat block renderer

use shipnote_core::config::MessageConfig;
use tracing::{debug, instrument};

use super::{entry_line, header_line, Block, Field, MessageRenderer, RenderedMessage};
use crate::types::{MessageContext, Report};

/// Renders a report as an ordered list of chat blocks
pub struct BlocksRenderer {
    bullet: String,
    date_format: String,
    default_title: Option<String>,
    uppercase_labels: bool,
}

impl BlocksRenderer {
    /// Create a renderer with default message settings
    pub fn new() -> Self {
        Self::with_config(&MessageConfig::default())
    }

    pub fn with_config(config: &MessageConfig) -> Self {
        Self {
            bullet: config.bullet.clone(),
            date_format: config.date_format.clone(),
            default_title: config.title.clone(),
            uppercase_labels: config.uppercase_field_labels,
        }
    }

    fn fields(&self, ctx: &MessageContext) -> Vec<Field> {
        ctx.params
            .iter()
            .map(|(label, value)| {
                let mut field = Field::new(label.as_str(), value.as_str());
                if self.uppercase_labels {
                    field.label = field.label.to_uppercase();
                }
                field
            })
            .collect()
    }
}

impl Default for BlocksRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRenderer for BlocksRenderer {
    #[instrument(skip(self, report, ctx), fields(outcome = report.outcome.name(), records = report.records.len()))]
    fn render(&self, report: &Report, ctx: &MessageContext) -> RenderedMessage {
        let mut blocks = Vec::new();

        if let Some(title) = ctx.title.as_ref().or(self.default_title.as_ref()) {
            blocks.push(Block::text(format!("*{}*", title)));
        }

        if !ctx.params.is_empty() {
            blocks.push(Block::FieldsSection {
                fields: self.fields(ctx),
            });
        }

        blocks.push(Block::Divider);
        blocks.push(Block::text(format!(
            "\n{}\n\n",
            header_line(&ctx.deployed_at, &self.date_format)
        )));

        if report.outcome.has_records() {
            blocks.extend(
                report
                    .records
                    .iter()
                    .map(|entry| Block::text(entry_line(&self.bullet, entry))),
            );
        } else if !report.body.trim().is_empty() {
            blocks.push(Block::text(report.body.as_str()));
        }

        if !report.outcome.is_success() {
            blocks.push(Block::Divider);
            blocks.push(Block::text(report.outcome.status_line()));
        }

        debug!(block_count = blocks.len(), "block message rendered");
        RenderedMessage::Blocks(blocks)
    }

    fn name(&self) -> &'static str {
        "blocks"
    }
}
