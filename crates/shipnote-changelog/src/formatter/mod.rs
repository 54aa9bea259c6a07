//! Deployment message renderers

mod block;
mod blocks;
mod flat;
mod registry;

pub use block::{Block, Field};
pub use blocks::BlocksRenderer;
pub use flat::FlatRenderer;
pub use registry::RendererRegistry;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::types::{MessageContext, Report, ResolvedRecord};

/// Format used when the configured one does not parse
const FALLBACK_DATE_FORMAT: &str = "%m/%d/%Y at %H:%M";

/// Character repeated to draw the rule above a status line
const RULE_CHAR: char = '⎯';

/// Trait for message renderers
pub trait MessageRenderer: Send + Sync {
    /// Render a report into a message
    fn render(&self, report: &Report, ctx: &MessageContext) -> RenderedMessage;

    /// Name used to look the renderer up
    fn name(&self) -> &'static str;
}

/// A rendered deployment message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderedMessage {
    Text(String),
    Blocks(Vec<Block>),
}

impl RenderedMessage {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Blocks(_) => None,
        }
    }

    pub fn blocks(&self) -> Option<&[Block]> {
        match self {
            Self::Text(_) => None,
            Self::Blocks(blocks) => Some(blocks),
        }
    }
}

/// `There was a Production deployment on ... (UTC), containing the following tickets:`
pub fn header_line(deployed_at: &DateTime<Utc>, date_format: &str) -> String {
    format!(
        "There was a Production deployment on {} (UTC), containing the following tickets:",
        format_date(deployed_at, date_format)
    )
}

fn format_date(deployed_at: &DateTime<Utc>, date_format: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(date_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        warn!(date_format, "invalid date format, using fallback");
        return deployed_at.format(FALLBACK_DATE_FORMAT).to_string();
    }
    deployed_at.format_with_items(items.into_iter()).to_string()
}

/// One bullet line, newline included
pub fn entry_line(bullet: &str, entry: &ResolvedRecord) -> String {
    let record = &entry.record;
    let mut line = format!("{} {}: ", bullet, entry.links);
    if !record.description.is_empty() {
        line.push_str(&record.description);
        line.push(' ');
    }
    line.push_str(&format!(
        "{} <{}|[PR: #{}]>\n",
        record.owner, record.external_url, record.external_code
    ));
    line
}

/// Horizontal rule sized to a third of the status line, at least 3 wide
pub fn rule(status: &str) -> String {
    let width = (status.chars().count() / 3).max(3);
    std::iter::repeat(RULE_CHAR).take(width).collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::outcome::{FormatError, Outcome};
    use crate::types::{ChangeRecord, Counts, MessageContext, Report, ResolvedRecord};

    pub fn deployed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap()
    }

    pub fn context() -> MessageContext {
        MessageContext::new(deployed_at())
    }

    pub fn resolved(owner: &str, description: &str, code: &str) -> ResolvedRecord {
        ResolvedRecord {
            record: ChangeRecord {
                owner: owner.to_string(),
                description: description.to_string(),
                reference_codes: vec!["CXJD-1".to_string()],
                external_code: code.to_string(),
                external_url: format!("https://github.com/Org/repo/pull/{}", code),
            },
            links: "<https://t/CXJD-1|[CXJD-1]>".to_string(),
        }
    }

    pub fn success_report() -> Report {
        Report {
            body: "raw".to_string(),
            records: vec![resolved("@ alice", "Fix bug", "10"), resolved("@ bob", "", "11")],
            counts: Counts {
                matched: 2,
                expected: 1,
            },
            outcome: Outcome::Success,
        }
    }

    pub fn failed_report(body: &str, err: FormatError) -> Report {
        Report::failed(body, Outcome::Failed(err), Counts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_header_line() {
        assert_eq!(
            header_line(&deployed_at(), "%m/%d/%Y at %H:%M"),
            "There was a Production deployment on 03/05/2024 at 14:07 (UTC), containing the following tickets:"
        );
    }

    #[test]
    fn test_header_line_invalid_format_falls_back() {
        let line = header_line(&deployed_at(), "%Q broken");
        assert!(line.contains("03/05/2024 at 14:07"));
    }

    #[test]
    fn test_entry_line() {
        assert_eq!(
            entry_line("•", &resolved("@ alice", "Fix bug", "10")),
            "• <https://t/CXJD-1|[CXJD-1]>: Fix bug @ alice <https://github.com/Org/repo/pull/10|[PR: #10]>\n"
        );
    }

    #[test]
    fn test_entry_line_empty_description() {
        assert_eq!(
            entry_line("-", &resolved("@ bob", "", "11")),
            "- <https://t/CXJD-1|[CXJD-1]>: @ bob <https://github.com/Org/repo/pull/11|[PR: #11]>\n"
        );
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(rule("ab"), "⎯⎯⎯");
        assert_eq!(rule(&"x".repeat(30)).chars().count(), 10);
    }
}
