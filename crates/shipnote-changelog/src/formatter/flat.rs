//! Flat text renderer

use shipnote_core::config::MessageConfig;
use tracing::{debug, instrument};

use super::{entry_line, header_line, rule, MessageRenderer, RenderedMessage};
use crate::types::{MessageContext, Report};

/// Renders a report as one annotated text message
pub struct FlatRenderer {
    bullet: String,
    date_format: String,
}

impl FlatRenderer {
    /// Create a renderer with default message settings
    pub fn new() -> Self {
        Self::with_config(&MessageConfig::default())
    }

    pub fn with_config(config: &MessageConfig) -> Self {
        Self {
            bullet: config.bullet.clone(),
            date_format: config.date_format.clone(),
        }
    }
}

impl Default for FlatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRenderer for FlatRenderer {
    #[instrument(skip(self, report, ctx), fields(outcome = report.outcome.name(), records = report.records.len()))]
    fn render(&self, report: &Report, ctx: &MessageContext) -> RenderedMessage {
        let mut output = String::new();
        let status = report.outcome.status_line();

        if report.outcome.has_records() {
            output.push_str(&header_line(&ctx.deployed_at, &self.date_format));
            output.push_str("\n\n");
            for entry in &report.records {
                output.push_str(&entry_line(&self.bullet, entry));
            }
            if !report.outcome.is_success() {
                output.push('\n');
                output.push_str(&rule(&status));
                output.push('\n');
                output.push_str(&status);
                output.push('\n');
            }
        } else {
            if !report.body.trim().is_empty() {
                output.push_str(&report.body);
                output.push_str("\n\n");
            }
            output.push_str(&rule(&status));
            output.push('\n');
            output.push_str(&status);
            output.push('\n');
        }

        debug!(output_len = output.len(), "flat message rendered");
        RenderedMessage::Text(output)
    }

    fn name(&self) -> &'static str {
        "flat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::test_support::*;
    use crate::outcome::{FormatError, Outcome};
    use crate::types::Counts;

    fn text(message: RenderedMessage) -> String {
        message.as_text().unwrap().to_string()
    }

    #[test]
    fn test_render_success() {
        let output = text(FlatRenderer::new().render(&success_report(), &context()));
        assert_eq!(
            output,
            "There was a Production deployment on 03/05/2024 at 14:07 (UTC), containing the following tickets:\n\n\
             • <https://t/CXJD-1|[CXJD-1]>: Fix bug @ alice <https://github.com/Org/repo/pull/10|[PR: #10]>\n\
             • <https://t/CXJD-1|[CXJD-1]>: @ bob <https://github.com/Org/repo/pull/11|[PR: #11]>\n"
        );
    }

    #[test]
    fn test_render_warning_appends_status() {
        let mut report = success_report();
        report.counts = Counts {
            matched: 2,
            expected: 5,
        };
        report.outcome = Outcome::NotAllProcessed {
            matched: 2,
            expected: 5,
        };
        let output = text(FlatRenderer::new().render(&report, &context()));
        assert!(output.contains("[PR: #11]>\n\n⎯"));
        assert!(output.ends_with(
            "[ 100 ] Warning :: Not all the PRs in the body matched the expected format\n"
        ));
    }

    #[test]
    fn test_render_error_echoes_body() {
        let body = "# Changes\n- @a x #1(https://github.com/o/r/pull/1)";
        let report = failed_report(body, FormatError::RobotSignMissing);
        let output = text(FlatRenderer::new().render(&report, &context()));
        assert!(output.starts_with(&format!("{}\n\n⎯", body)));
        assert!(output.ends_with("[ 320 ] Error :: Missing sign: robot: auto generated pull request\n"));
        assert!(!output.contains("Production deployment"));
    }

    #[test]
    fn test_render_empty_body_banner_only() {
        let report = failed_report("", FormatError::EmptyBody);
        let output = text(FlatRenderer::new().render(&report, &context()));
        let status = "[ 300 ] Error :: Empty body: PR has an empty body";
        assert_eq!(output, format!("{}\n{}\n", rule(status), status));
    }

    #[test]
    fn test_custom_bullet() {
        let renderer = FlatRenderer::with_config(&MessageConfig {
            bullet: "*".to_string(),
            ..MessageConfig::default()
        });
        let output = text(renderer.render(&success_report(), &context()));
        assert!(output.contains("\n* <https://t/CXJD-1|[CXJD-1]>: Fix bug"));
    }
}
